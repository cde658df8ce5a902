mod config;

use std::sync::Arc;

use chrono::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use ephemera_api::auth::{AppState, AppStateInner};
use ephemera_store::{Store, SystemClock};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "ephemera_server=debug,ephemera_api=debug,ephemera_store=debug,tower_http=debug"
                        .into()
                }),
        )
        .init();

    let config = Config::from_env()?;

    let store = Store::new(
        Arc::new(SystemClock),
        Duration::minutes(config.post_lifetime_minutes),
    );
    let state: AppState = Arc::new(AppStateInner::new(
        store,
        config.session_cookie.clone(),
        config.static_dir.clone(),
    ));

    let app = ephemera_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Ephemera listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Ephemera stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!("Ctrl-C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
