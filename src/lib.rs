//! Edge gateway for the server-monitoring UI.
//!
//! Serves the pre-built UI assets, forwards `/api` traffic to the monitoring
//! backend and answers a liveness probe.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod security;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
