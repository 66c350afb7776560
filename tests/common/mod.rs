use tracker_service::config::{Config, CorsConfig, MongoConfig, ServerConfig};
use tracker_service::services::MongoDb;
use tracker_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        Self::spawn_with_database_uri(&uri).await
    }

    pub async fn spawn_with_database_uri(uri: &str) -> Self {
        let db_name = format!("tracker_test_{}", Uuid::new_v4());

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port for testing
            },
            mongodb: MongoConfig {
                uri: uri.to_string(),
                database: db_name.clone(),
            },
            cors: CorsConfig {
                allowed_origin: "http://localhost:5173".to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the root endpoint
        let client = reqwest::Client::new();
        let root_url = format!("http://127.0.0.1:{}/", port);
        for _ in 0..50 {
            if client.get(&root_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (drop the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
