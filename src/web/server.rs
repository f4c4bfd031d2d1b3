//! Web server for notedrive.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::ServerConfig;
use crate::note::NoteRepository;

use super::handlers::AppState;
use super::router::{create_health_router, create_router, create_swagger_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// CORS allowed origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server over the given repository.
    pub fn new(config: &ServerConfig, repo: NoteRepository) -> Self {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .expect("Invalid web server address");

        Self {
            addr,
            app_state: Arc::new(AppState::new(repo)),
            cors_origins: config.cors_origins.clone(),
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn router(&self) -> axum::Router {
        create_router(self.app_state.clone(), &self.cors_origins)
            .merge(create_health_router())
            .merge(create_swagger_router())
            .layer(CompressionLayer::new())
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
