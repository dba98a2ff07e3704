//! HTTP server assembly for docassist

mod cors;
mod health;

use std::net::SocketAddr;

use axum::{Router, extract::DefaultBodyLimit};
use docassist_config::Config;
use tower_http::trace::TraceLayer;

/// Port the browser frontend expects the backend on
pub const DEFAULT_PORT: u16 = 5002;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Every collaborator is constructed once here and shared by all
    /// requests for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if a transcription, chat or OCR provider fails to
    /// initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)));

        let stt_state = stt::build_server(config)?;
        let llm_state = docassist_llm::build_server(config)?;
        let ocr_state = ocr::build_server(config)?;
        let workflow_state =
            docassist_workflow::build_workflow(stt_state.clone(), &llm_state, ocr_state.clone());

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app
            .merge(stt::endpoint_router().with_state(stt_state))
            .merge(docassist_llm::endpoint_router().with_state(llm_state))
            .merge(ocr::endpoint_router().with_state(ocr_state))
            .merge(docassist_workflow::endpoint_router().with_state(workflow_state));

        app = app.layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
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
