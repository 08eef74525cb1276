//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap backend calls with a deadline
//! - Cancel the wrapped operation cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities; the inner future is dropped on expiry
//! - Timeout errors are distinct from other upstream errors

use std::future::Future;
use std::time::Duration;

use crate::error::GatewayError;

/// Run `fut`, failing with [`GatewayError::UpstreamTimeout`] if it does not
/// finish within `deadline`.
pub async fn with_deadline<F, T, E>(deadline: Duration, fut: F) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<GatewayError>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(GatewayError::UpstreamTimeout(deadline)),
    }
}
