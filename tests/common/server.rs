//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own database.

use super::constants::*;
use super::fixtures::create_test_db_with_users;
use beaukit_server::analysis::RangePolicy;
use beaukit_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use beaukit_server::user::{SqliteUserStore, UserManager, UserStore, DEFAULT_AUTH_TOKEN_TTL};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated database
///
/// When dropped, the server shuts down and the temp db is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    #[allow(dead_code)]
    pub port: u16,

    /// User store for direct database access in tests
    #[allow(dead_code)]
    pub user_store: Arc<dyn UserStore>,

    _temp_db_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with(RangePolicy::Permissive, DEFAULT_AUTH_TOKEN_TTL).await
    }

    /// Spawns a server that rejects RGB components outside [0, 255]
    #[allow(dead_code)]
    pub async fn spawn_strict() -> Self {
        Self::spawn_with(RangePolicy::Strict, DEFAULT_AUTH_TOKEN_TTL).await
    }

    pub async fn spawn_with(range_policy: RangePolicy, auth_token_ttl: Duration) -> Self {
        let (temp_db_dir, db_path) =
            create_test_db_with_users().expect("Failed to create test database");

        let user_store = SqliteUserStore::new(&db_path).expect("Failed to open user store");
        let user_store_for_test: Arc<dyn UserStore> = Arc::new(user_store.clone());

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
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            range_policy,
            ..Default::default()
        };
        let user_manager = UserManager::new(Box::new(user_store), auth_token_ttl);
        let app = make_app(config, user_manager);

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
            user_store: user_store_for_test,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Polls the health endpoint until it answers
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

            match client
                .get(format!("{}/api/health", self.base_url))
                .send()
                .await
            {
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
