//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, concurrency limit)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{limit::GlobalConcurrencyLimitLayer, ServiceBuilder};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::docs::API_VERSION;
use crate::http::handlers::{documentation_fallback, encode};
use crate::http::request::{make_request_span, MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics::track_requests;
use crate::service::{AppName, EventLog, Rot13Service, TracingEventLog};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Rot13Service,
}

/// HTTP server exposing the encode endpoint.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that logs through the global tracing subscriber.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_event_log(config, Arc::new(TracingEventLog))
    }

    /// Create a server with a caller-supplied application log sink.
    pub fn with_event_log(config: ServiceConfig, log: Arc<dyn EventLog>) -> Self {
        let app_name = AppName::from_config(&config.application);
        let state = AppState {
            service: Rot13Service::new(log, app_name),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let versioned = format!("/v{API_VERSION}/encode");

        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn(track_requests))
            // One semaphore shared by every route and the fallback.
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ));

        Router::new()
            .route(&versioned, get(encode))
            .route("/encode", get(encode))
            .fallback(documentation_fallback)
            .with_state(state)
            .layer(layers)
    }

    /// The fully layered router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
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
