//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the route table as the single request-handling service
//! - Wire up middleware (request ID, timeout, tracing, panic containment)
//! - Bind server to listener
//! - Stop accepting on shutdown signal and drain in-flight requests

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::CanalConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing::Router as RegexRouter;

/// HTTP server fronting a sealed route table.
pub struct HttpServer {
    app: Router,
    config: CanalConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes`.
    pub fn new(config: CanalConfig, routes: RegexRouter) -> Self {
        let app = Self::build_app(&config, routes);
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    fn build_app(config: &CanalConfig, routes: RegexRouter) -> Router {
        Router::new()
            .fallback_service(routes)
            .layer(CatchPanicLayer::new())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &CanalConfig {
        &self.config
    }
}
