use service_core::observability::init_tracing;
use teacher_service::config::TeacherConfig;
use teacher_service::services::init_metrics;
use teacher_service::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = TeacherConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("teacher-service", &config.log_level);

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    application.run_until_stopped().await
}
