//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Hold the liveness path and proxy prefix
//! - Decide which handler serves a request path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Precedence: liveness, proxy prefix, index, static
//! - `Static` covers both hits and misses; the file service decides 404

use crate::config::GatewayConfig;
use crate::routing::matcher::PathPrefixMatcher;

/// Where a request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Liveness,
    Proxy,
    Index,
    Static,
}

impl Route {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Liveness => "liveness",
            Route::Proxy => "proxy",
            Route::Index => "index",
            Route::Static => "static",
        }
    }
}

/// Compiled routing rules.
#[derive(Debug, Clone)]
pub struct RouteTable {
    liveness_path: String,
    proxy: PathPrefixMatcher,
}

impl RouteTable {
    /// Create a table from a liveness path and a proxy prefix.
    pub fn new(liveness_path: impl Into<String>, proxy_prefix: impl Into<String>) -> Self {
        Self {
            liveness_path: liveness_path.into(),
            proxy: PathPrefixMatcher::new(proxy_prefix),
        }
    }

    /// Create a table from the liveness and upstream sections.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            config.liveness.path.clone(),
            config.upstream.path_prefix.clone(),
        )
    }

    /// Resolve a request path to a route.
    pub fn resolve(&self, path: &str) -> Route {
        if path == self.liveness_path {
            Route::Liveness
        } else if self.proxy.matches(path) {
            Route::Proxy
        } else if path == "/" {
            Route::Index
        } else {
            Route::Static
        }
    }
}
