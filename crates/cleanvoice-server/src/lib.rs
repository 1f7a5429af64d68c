#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod cors;
mod error;
mod extract;
mod health;
mod relay;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use cleanvoice_config::Config;
use tower_http::trace::TraceLayer;

pub use error::RelayError;
pub use relay::DictationResponse;

/// Shared state for the relay handler
pub struct RelayState {
    transcriber: Box<dyn transcribe::SpeechToText>,
    cleaner: Box<dyn polish::CleanupModel>,
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream client fails to initialize,
    /// which in practice means a missing credential
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let transcriber = transcribe::build_client(&config)
            .map_err(|e| anyhow::anyhow!("failed to initialize transcription client: {e}"))?;
        let cleaner = polish::build_client(&config)
            .map_err(|e| anyhow::anyhow!("failed to initialize cleanup client: {e}"))?;

        let state = Arc::new(RelayState { transcriber, cleaner });

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // The relay endpoint; axum's method router answers everything
        // except POST/OPTIONS with 405 before any upstream call
        app = app.route(
            "/v1/dictations",
            axum::routing::post(relay::relay).options(relay::preflight),
        );

        let mut app = app.with_state(state);

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS headers on every response; an explicit options route above
        // keeps preflights at 204 with an empty body
        let cors_config = Arc::new(config.server.cors.clone());
        app = app.layer(axum::middleware::from_fn(move |request, next| {
            let config = Arc::clone(&cors_config);
            async move { cors::cors_middleware(config, request, next).await }
        }));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
