//! Static asset serving.
//!
//! # Responsibilities
//! - Serve the designated index document for `/`
//! - Resolve every other path against the asset root
//!
//! # Design Decisions
//! - File IO, content types and traversal checks are delegated to
//!   `tower_http::services`
//! - Misses are answered with an empty 404 and are not logged as errors

use std::convert::Infallible;
use std::path::Path;

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetConfig;

/// File services rooted at the configured asset directory.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    dir: ServeDir,
    index: ServeFile,
}

impl StaticAssets {
    pub fn new(config: &AssetConfig) -> Self {
        let root = Path::new(&config.root);
        Self {
            dir: ServeDir::new(root),
            index: ServeFile::new(root.join(&config.index)),
        }
    }

    /// Serve the index document regardless of the request path.
    pub async fn index(&self, request: Request<Body>) -> Response {
        into_response(self.index.clone().oneshot(request).await)
    }

    /// Serve the file the request path points at, or 404.
    pub async fn file(&self, request: Request<Body>) -> Response {
        into_response(self.dir.clone().oneshot(request).await)
    }
}

fn into_response<R: IntoResponse>(result: Result<R, Infallible>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
