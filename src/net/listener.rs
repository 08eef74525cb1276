//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve the configured host (IP literal or name)
//! - Bind the listening socket and report where it landed

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to resolve or bind the address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listening socket described by `config`.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.bind_address();
    let listener = match TcpListener::bind(address.as_str()).await {
        Ok(listener) => listener,
        Err(source) => return Err(ListenerError::Bind { address, source }),
    };

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
