use tracker_service::config::Config;
use tracker_service::observability::init_tracing;
use tracker_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = Config::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
