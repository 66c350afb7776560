//! Application startup and lifecycle management.
//!
//! The MongoDB connection is constructed once in [`Application::build`] and
//! handed to handlers through [`AppState`]; it is released when the server
//! future resolves and the state drops.

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let state = AppState { db };

        let origin = config.cors.allowed_origin.parse::<HeaderValue>().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid CORS origin '{}': {}",
                config.cors.allowed_origin,
                e
            ))
        })?;

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);

        let app = Router::new()
            .route("/", get(handlers::read_root))
            .route("/api/v1/health", get(handlers::health_check))
            .route(
                "/api/v1/test",
                post(handlers::create_record).get(handlers::list_records),
            )
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state.clone());

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid listen address: {}", e))
            })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router: app,
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped; MongoDB connection released");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
