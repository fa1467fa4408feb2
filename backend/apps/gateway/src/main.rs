//! Gateway Entry Point
//!
//! Loads configuration, builds the shared HTTP client and serves the gate
//! in front of the rendering origin.
//! Uses `anyhow` for startup errors; request-level errors are `GateError`.

use anyhow::Context;
use gate::{GateConfig, HttpIdentityBackend, OriginProxy, gate_router};
use gate::config::CookieAttributes;
use platform::client::{HttpClientConfig, build_http_client};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,gate=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environment
    let backend_url = env::var("BACKEND_URL").unwrap_or_default();
    let origin_url = env::var("ORIGIN_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let listen_addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .context("LISTEN_ADDR must be a socket address")?;
    let verify_timeout = duration_ms("VERIFY_TIMEOUT_MS", 5_000)?;
    let origin_timeout = duration_ms("ORIGIN_TIMEOUT_MS", 30_000)?;
    let cookie_secure = flag("COOKIE_SECURE", true)?;

    if backend_url.is_empty() {
        tracing::warn!("BACKEND_URL is not set; every protected request will fail with 500");
    }

    let config = GateConfig {
        verify_timeout,
        cookie: CookieAttributes {
            secure: cookie_secure,
            ..Default::default()
        },
        ..GateConfig::with_backend(backend_url)
    };

    // One connection pool shared by the identity backend and the origin proxy
    let client = build_http_client(&HttpClientConfig::default())?;

    let backend = HttpIdentityBackend::new(client.clone(), &config);
    let origin = OriginProxy::new(client, origin_url.clone(), origin_timeout);

    tracing::info!(
        backend = %config.backend_base_url,
        origin = %origin_url,
        verify_timeout_ms = verify_timeout.as_millis() as u64,
        "Gate configured"
    );

    // Build router
    let app = gate_router(backend, origin, config).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", listen_addr);

    let listener = TcpListener::bind(listen_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn duration_ms(key: &str, default_ms: u64) -> anyhow::Result<Duration> {
    match env::var(key) {
        Ok(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a number of milliseconds"))?;
            Ok(Duration::from_millis(ms))
        }
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

fn flag(key: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => anyhow::bail!("{key} must be a boolean, got {other:?}"),
        },
        Err(_) => Ok(default),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
