use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use oauth_relay::infrastructure::config::{Config, LogFormat};
use oauth_relay::infrastructure::http::{create_app, start_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting OAuth relay on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        public_base_url = %config.public_base_url,
        token_url = %config.oauth_token_url,
        upstream_timeout_ms = config.upstream_timeout_ms,
        "Configuration loaded"
    );

    if !config.is_development() {
        tracing::warn!("Local session tokens are enabled outside development");
    }

    let app = create_app(&config)?;
    tracing::info!("Routes configured");

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "oauth_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "oauth_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
