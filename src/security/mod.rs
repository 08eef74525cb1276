//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarded request:
//!     → headers.rs (strip hop-by-hop, rewrite Host)
//! Every response:
//!     → headers.rs (cross-origin policy)
//! ```

pub mod headers;
