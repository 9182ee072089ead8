//! Workforce Dispatch server
//!
//! Serves the JSON API together with health and metrics endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use chrono::Utc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wf_api::AppState;
use wf_auth::{Authenticator, MemorySessionStore, SessionStore};
use wf_core::config::AppConfig;
use wf_store::MemoryStore;

mod health;
mod metrics;

use health::HealthChecker;
use metrics::Metrics;

/// How often expired sessions are swept out
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting Workforce Dispatch"
    );

    let sessions = Arc::new(MemorySessionStore::new());
    let authenticator = Authenticator::from_config(&config.auth, sessions.clone())?;

    let store = if config.seed.demo_data {
        let passwords = authenticator.passwords();
        let store = MemoryStore::seeded(Utc::now(), |plain| Ok(passwords.hash(plain)?))?;
        info!("Loaded demo data");
        store
    } else {
        MemoryStore::new()
    };

    let addr = config.server_addr();
    let state = AppState::new(store, authenticator);
    let health = Arc::new(HealthChecker::new(state.store.clone(), sessions.clone()));
    let metrics = Arc::new(Metrics::new());

    spawn_session_sweeper(sessions, metrics.clone());

    let app = build_router(state, health, metrics);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,wf_server=debug,wf_api=debug,wf_services=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the application router
fn build_router(state: AppState, health: Arc<HealthChecker>, metrics: Arc<Metrics>) -> Router {
    // Health check routes (no auth required)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .with_state(health);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics.clone());

    Router::new()
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(wf_api::router().with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .layer(middleware::from_fn_with_state(
            metrics,
            metrics::metrics_middleware,
        ))
}

/// Periodically drop expired sessions
fn spawn_session_sweeper(sessions: Arc<MemorySessionStore>, metrics: Arc<Metrics>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = sessions.cleanup_expired();
            if removed > 0 {
                debug!(removed, "Swept expired sessions");
                metrics.record_expired_sessions(removed);
            }
        }
    });
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
