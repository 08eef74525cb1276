//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the dispatch handler
//! - Wire up middleware (request ID, CORS, tracing)
//! - Dispatch each request by route precedence
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{validate_config, ConfigError, GatewayConfig};
use crate::http::assets::StaticAssets;
use crate::http::liveness;
use crate::http::proxy::UpstreamProxy;
use crate::http::request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::{Route, RouteTable};
use crate::security::headers::cors_layer;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub proxy: Arc<UpstreamProxy>,
    pub assets: StaticAssets,
    pub service: Arc<str>,
}

/// HTTP server for the edge gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Validate `config` and build the server.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let proxy = UpstreamProxy::new(&config.upstream)
            .map_err(|e| ConfigError::Validation(vec![e]))?;

        let state = AppState {
            routes: Arc::new(RouteTable::from_config(&config)),
            proxy: Arc::new(proxy),
            assets: StaticAssets::new(&config.assets),
            service: Arc::from(config.liveness.service.as_str()),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request),
                )
            }))
            .layer(cors_layer())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// The router, for serving in-process (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            prefix = %self.config.upstream.path_prefix,
            assets = %self.config.assets.root,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Route the request by precedence: liveness, proxy, index, static.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let route = state.routes.resolve(request.uri().path());

    let response = match route {
        Route::Liveness => liveness::report(&state.service).into_response(),
        Route::Proxy => state.proxy.forward(request).await,
        Route::Index => state.assets.index(request).await,
        Route::Static => state.assets.file(request).await,
    };

    metrics::record_request(route.as_str(), response.status().as_u16(), start_time);
    response
}
