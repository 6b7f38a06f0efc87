//! Router assembly and serving for toolprobe

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio_util::sync::CancellationToken;
use toolprobe_config::Config;
use toolprobe_dispatch::{ToolCallDispatcher, probe_router};
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let dispatcher = Arc::new(ToolCallDispatcher::new(config.gateway, config.provider));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(probe_router(dispatcher));
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Consume the server, returning the assembled router
    ///
    /// Used by tests that bind their own listener.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Bind and serve until the cancellation token fires
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener or serving fails
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        tracing::info!(address = %self.listen_address, "listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
            })
            .await?;

        Ok(())
    }
}
