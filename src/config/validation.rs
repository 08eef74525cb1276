//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream URL is something the HTTP client can reach
//! - Validate value ranges (timeouts > 0)
//! - Detect a proxy prefix that would swallow the liveness probe
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::path::{Component, Path};

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;
use crate::routing::matcher::PathPrefixMatcher;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("upstream.url `{url}` is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream.url scheme `{0}` is not supported, use http")]
    UnsupportedScheme(String),

    #[error("upstream.path_prefix `{0}` must start with `/`, must not end with `/` and must not be the root")]
    InvalidPathPrefix(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("liveness.path `{0}` must start with `/`")]
    InvalidLivenessPath(String),

    #[error("liveness.path `{path}` is shadowed by upstream.path_prefix `{prefix}`")]
    LivenessUnderProxyPrefix { path: String, prefix: String },

    #[error("assets.index `{0}` must be a relative path inside the asset root")]
    InvalidIndex(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.url) {
        Ok(url) if url.scheme() != "http" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(url) if url.host_str().is_none() => {
            errors.push(ValidationError::InvalidUpstreamUrl {
                url: upstream.url.clone(),
                reason: "missing host".to_string(),
            });
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    let prefix = &upstream.path_prefix;
    let prefix_ok = prefix.starts_with('/') && !prefix.ends_with('/');
    if !prefix_ok {
        errors.push(ValidationError::InvalidPathPrefix(prefix.clone()));
    }

    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let liveness = &config.liveness.path;
    if !liveness.starts_with('/') {
        errors.push(ValidationError::InvalidLivenessPath(liveness.clone()));
    } else if prefix_ok && PathPrefixMatcher::new(prefix.as_str()).matches(liveness) {
        errors.push(ValidationError::LivenessUnderProxyPrefix {
            path: liveness.clone(),
            prefix: prefix.clone(),
        });
    }

    let index = Path::new(&config.assets.index);
    let index_ok = !config.assets.index.is_empty()
        && index.components().all(|c| matches!(c, Component::Normal(_)));
    if !index_ok {
        errors.push(ValidationError::InvalidIndex(config.assets.index.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
