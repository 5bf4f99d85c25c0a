use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use roster_store::{InMemoryUserStore, UserStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Roster HTTP server.
pub struct RosterServer {
    config: ServerConfig,
    store: Arc<dyn UserStore>,
}

impl RosterServer {
    /// Server backed by a fresh, empty in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryUserStore::new()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn UserStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let router = build_router(Arc::clone(&self.store));
        if self.config.cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let addr = listener.local_addr()?;
        tracing::info!("Roster server listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("Roster server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn server_construction() {
        let server = RosterServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:3001".parse().unwrap());
        assert!(server.store().is_empty().unwrap());
    }

    #[test]
    fn router_builds_with_cors() {
        let config = ServerConfig { cors: true, ..ServerConfig::default() };
        let _router = RosterServer::new(config).router();
    }

    #[tokio::test]
    async fn serves_over_tcp_and_shuts_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = RosterServer::new(ServerConfig::default());
        let handle = tokio::spawn(server.serve_on(listener, async {
            let _ = rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /users HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        assert!(response.ends_with("{\"users\":[]}"), "got: {response}");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
