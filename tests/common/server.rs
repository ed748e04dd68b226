//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server reading its own data directory.

use super::constants::*;
use super::fixtures::create_test_data_dir;
use catalogue_server::config::QuerySettings;
use catalogue_server::{
    make_app, CacheConfig, CatalogCache, DirectorySource, RequestsLoggingLevel, ServerConfig,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated data directory
///
/// When dropped, the server gracefully shuts down and the data directory is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The cache behind the server, for inspecting reloads
    pub cache: Arc<CatalogCache>,

    // Private fields - keep resources alive until drop
    data_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with the default cache window
    pub async fn spawn() -> Self {
        Self::spawn_with_cache(CacheConfig::default()).await
    }

    /// Spawns a new test server on a random port
    ///
    /// This function:
    /// 1. Creates a temporary data directory with the fixture catalogue
    /// 2. Builds a cache over it (nothing is loaded until the first request)
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if fixture creation, port binding or startup fails, or if the
    /// server doesn't become ready within timeout.
    pub async fn spawn_with_cache(cache_config: CacheConfig) -> Self {
        let data_dir = create_test_data_dir().expect("Failed to create test data directory");

        let cache = Arc::new(CatalogCache::new(
            Box::new(DirectorySource::new(data_dir.path())),
            cache_config,
        ));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            assets_dir: None,
            query: QuerySettings::default(),
        };

        let app = make_app(config, cache.clone()).expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            cache,
            data_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// The directory the server reads its catalogue from
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Waits for the server to become ready by polling the service index
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
