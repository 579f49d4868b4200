//! Web Gateway Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

use access::infra::WsConnector;
use access::{AccessConfig, http_access_router};
use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,access=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_access_config()?;
    tracing::info!(backend = %config.backend_base_url, "Backend auth API configured");
    match WsConnector::from_config(&config) {
        Some(connector) => tracing::info!(url = connector.url(), "Realtime socket configured"),
        None => tracing::info!("REALTIME_URL not set, realtime messaging disabled"),
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .merge(http_access_router(config).context("failed to build access router")?)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a port number")?,
        Err(_) => 3000,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Access layer configuration from the environment
fn load_access_config() -> anyhow::Result<AccessConfig> {
    let mut config = if cfg!(debug_assertions) {
        AccessConfig::development()
    } else {
        AccessConfig::with_random_secret()
    };

    match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())
                .context("SESSION_SECRET must be base64")?;
            config.session_secret = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    }

    if let Ok(url) = env::var("BACKEND_API_URL") {
        config = config.with_backend(url);
    }

    if let Ok(secs) = env::var("UPSTREAM_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
        config.upstream_timeout = Some(Duration::from_secs(secs));
    }

    config.realtime_url = env::var("REALTIME_URL").ok();

    Ok(config)
}
