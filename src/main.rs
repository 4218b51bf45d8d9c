//! Compliance Form - Binary entry point
//!
//! Serves the form API on the configured address (default 127.0.0.1:8080).

use compliance_form::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;

    let controller = compliance_form::bootstrap(&config.export);
    tracing::info!(
        session = %controller.id(),
        scale = config.export.scale,
        requirement_rows = config.export.requirement_rows,
        "form session ready"
    );

    let app = compliance_form::adapters::http::app(controller, &config.server);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Compliance form listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
