//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend:
//!     → timeouts.rs (enforce the upstream deadline)
//!     → On failure: surfaced immediately as GatewayError
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every upstream call has a deadline
//! - No retries: a failed upstream call is reported to the caller at once

pub mod timeouts;
