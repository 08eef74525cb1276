//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (precedence walk)
//!     → matcher.rs (proxy prefix test)
//!     → Return: Route::{Liveness, Proxy, Index, Static}
//! ```
//!
//! # Design Decisions
//! - Route table built at startup, immutable at runtime
//! - Precedence is an explicit ordered check, not framework route priority
//! - Decisions depend on the path only; no per-request state

pub mod matcher;
pub mod router;

pub use matcher::PathPrefixMatcher;
pub use router::{Route, RouteTable};
