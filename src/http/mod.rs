//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing decides the route
//!     → liveness.rs | proxy.rs | assets.rs
//!     → Send to client (with CORS headers)
//! ```

pub mod assets;
pub mod liveness;
pub mod proxy;
pub mod request;
pub mod server;

pub use proxy::{UpstreamProxy, UpstreamTarget};
pub use request::X_REQUEST_ID;
pub use server::{AppState, GatewayServer};
