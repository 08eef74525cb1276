//! Header manipulation and cross-origin policy.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers in both directions of the upstream hop
//! - Allow the UI to be fetched from any origin
//!
//! # Design Decisions
//! - Headers listed in `Connection` are hop-by-hop too
//! - CORS is permissive; preflight requests are answered by the gateway

use axum::http::{header, HeaderMap};
use tower_http::cors::{Any, CorsLayer};

/// Headers that only describe the current connection.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Remove hop-by-hop headers, including any named in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    for name in named {
        headers.remove(name.as_str());
    }
    for name in HOP_BY_HOP {
        headers.remove(*name);
    }
}

/// Cross-origin policy applied to every response.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
