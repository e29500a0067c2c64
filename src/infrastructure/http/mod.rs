pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    health, index,
    local::LocalTokenController,
    oauth::OAuthController,
};
use crate::domain::{oauth::AuthorizeUrlBuilder, session::SessionTokenIssuer};
use crate::infrastructure::{config::Config, oauth::HttpTokenClient};

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Instantiate clients, issuers and controllers from configuration and
/// return the fully routed application
pub fn create_app(config: &Config) -> anyhow::Result<Router> {
    let token_client = Arc::new(HttpTokenClient::new(
        config.oauth_token_url.clone(),
        config.oauth_client_id.clone(),
        config.oauth_client_secret.clone(),
        config.oauth_redirect_uri.clone(),
        Duration::from_millis(config.upstream_timeout_ms),
    )?);

    let authorize_urls = AuthorizeUrlBuilder::new(
        config.provider_domain.clone(),
        config.oauth_client_id.clone(),
        config.provider_authorize_path.clone(),
        config.callback_uri(),
        config.abort_uri(),
    );

    let issuer = Arc::new(SessionTokenIssuer::new(
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
    ));

    let local_controller = Arc::new(LocalTokenController::new(issuer));
    let oauth_controller = Arc::new(OAuthController::new(token_client, authorize_urls));

    Ok(build_router(local_controller, oauth_controller))
}

/// Build the application router with all routes configured
pub fn build_router(
    local_controller: Arc<LocalTokenController>,
    oauth_controller: Arc<OAuthController>,
) -> Router {
    let local_routes = Router::new()
        .route(
            "/local",
            get(LocalTokenController::issue).post(LocalTokenController::issue),
        )
        .with_state(local_controller);

    let oauth_routes = Router::new()
        .route("/oauth", get(OAuthController::authorize))
        .route("/oauth/redirect", get(OAuthController::callback))
        .with_state(oauth_controller);

    Router::new()
        .route("/", get(index::index))
        .route("/index", get(index::index))
        .route("/health", get(health::health))
        .merge(local_routes)
        .merge(oauth_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and serve until a shutdown signal arrives
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
