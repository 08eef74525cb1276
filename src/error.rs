//! Errors raised while serving a request.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure reaching the upstream backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream did not respond within {0:?}")]
    UpstreamTimeout(Duration),

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(#[from] hyper_util::client::legacy::Error),

    #[error("invalid upstream request: {0}")]
    InvalidUpstreamUri(#[from] axum::http::Error),

    #[error("upstream body failed: {0}")]
    UpstreamBody(#[from] axum::Error),
}

impl GatewayError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::UpstreamTimeout(_) => "timeout",
            GatewayError::UpstreamUnreachable(_) => "unreachable",
            GatewayError::InvalidUpstreamUri(_) => "invalid_uri",
            GatewayError::UpstreamBody(_) => "body",
        }
    }
}

/// Body of every gateway-generated error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// 500 response carrying `{"error": message}`.
pub fn failure_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: message }),
    )
        .into_response()
}
