//! Upstream forwarding.
//!
//! # Responsibilities
//! - Rewrite the request URI onto the upstream origin, keeping the path
//! - Replace `Host` with the upstream authority
//! - Bound the upstream exchange and map every failure to a 500
//!
//! # Design Decisions
//! - The body is streamed in both directions, never buffered
//! - The response body is idle-bounded: each chunk must arrive within the
//!   upstream timeout or the stream is aborted
//! - The upstream hop is always HTTP/1.1 over a plain TCP connector
//! - Dropping the handler future (client went away) drops the upstream call

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{
        header,
        uri::{Authority, PathAndQuery, Scheme},
        HeaderValue, Request, Uri, Version,
    },
    response::Response,
};
use futures_util::{stream, StreamExt};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use url::Url;

use crate::config::{UpstreamConfig, ValidationError};
use crate::error::{failure_response, GatewayError};
use crate::observability::metrics;
use crate::resilience::timeouts::with_deadline;
use crate::security::headers::strip_hop_by_hop;

/// Parsed upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    authority: Authority,
    base_path: String,
    host: HeaderValue,
}

impl UpstreamTarget {
    /// Parse an `http://host[:port][/base]` URL.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidUpstreamUrl {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" {
            return Err(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        let host = url.host_str().ok_or_else(|| invalid("missing host".to_string()))?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let authority = Authority::from_str(&authority).map_err(|e| invalid(e.to_string()))?;
        let host = HeaderValue::from_str(authority.as_str()).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            authority,
            base_path: url.path().trim_end_matches('/').to_string(),
            host,
        })
    }

    /// Upstream URI for an inbound path and query. The path is kept as is,
    /// so the backend sees exactly what a direct caller would send.
    pub fn uri_for(&self, path_and_query: &str) -> Result<Uri, axum::http::Error> {
        Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.authority.clone())
            .path_and_query(format!("{}{}", self.base_path, path_and_query))
            .build()
    }

    /// Value for the forwarded `Host` header.
    pub fn host_header(&self) -> HeaderValue {
        self.host.clone()
    }
}

impl fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}{}", self.authority, self.base_path)
    }
}

/// Forwards requests to the configured backend.
#[derive(Debug, Clone)]
pub struct UpstreamProxy {
    target: UpstreamTarget,
    client: Client<HttpConnector, Body>,
    timeout: Duration,
    error_message: String,
}

impl UpstreamProxy {
    /// Build the client for `config.url`; connects are bounded by the
    /// upstream timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ValidationError> {
        let target = UpstreamTarget::parse(&config.url)?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(config.timeout()));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            target,
            client,
            timeout: config.timeout(),
            error_message: config.error_message.clone(),
        })
    }

    /// Forward `request` and return the upstream response, or a 500 with a
    /// JSON error body if the upstream could not be reached in time.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let started = Instant::now();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();

        match self.try_forward(request).await {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    status = %response.status(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Upstream responded"
                );
                response
            }
            Err(err) => {
                tracing::error!(
                    method = %method,
                    path = %path,
                    upstream = %self.target,
                    error = %err,
                    "Upstream request failed"
                );
                metrics::record_upstream_failure(err.kind());
                failure_response(&self.error_message)
            }
        }
    }

    async fn try_forward(&self, request: Request<Body>) -> Result<Response, GatewayError> {
        let (mut parts, body) = request.into_parts();

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or("/");
        parts.uri = self.target.uri_for(path_and_query)?;
        parts.version = Version::HTTP_11;

        strip_hop_by_hop(&mut parts.headers);
        parts.headers.insert(header::HOST, self.target.host_header());

        let upstream_request = Request::from_parts(parts, body);
        let response = with_deadline(self.timeout, self.client.request(upstream_request)).await?;

        Ok(self.into_client_response(response))
    }

    fn into_client_response(&self, response: Response<Incoming>) -> Response {
        let (mut parts, body) = response.into_parts();
        strip_hop_by_hop(&mut parts.headers);
        let body = idle_bounded(Body::new(body), self.timeout, self.target.to_string());
        Response::from_parts(parts, body)
    }
}

/// Re-stream `body`, failing it if no chunk arrives within `idle`.
fn idle_bounded(body: Body, idle: Duration, upstream: String) -> Body {
    let chunks = stream::unfold(Some(body.into_data_stream()), move |state| {
        let upstream = upstream.clone();
        async move {
            let mut chunks = state?;
            let err = match tokio::time::timeout(idle, chunks.next()).await {
                Ok(Some(Ok(chunk))) => return Some((Ok(chunk), Some(chunks))),
                Ok(None) => return None,
                Ok(Some(Err(e))) => GatewayError::from(e),
                Err(_) => GatewayError::UpstreamTimeout(idle),
            };
            tracing::error!(upstream = %upstream, error = %err, "Upstream body aborted");
            metrics::record_upstream_failure(err.kind());
            Some((Err(err), None))
        }
    });
    Body::from_stream(chunks)
}
