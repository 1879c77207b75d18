use std::sync::Arc;

use anyhow::Context;
use api::config::Auth;
use api::db::{self, MemoryUserStore, PgUserStore, UserStore};
use api::Settings;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use web::{build_router, AppState};

const DEFAULT_LOG_FILTER: &str = "info,web=debug,api=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = Settings::new().context("failed to load settings")?;
    if settings.auth.secret == Auth::default().secret {
        warn!("using the default session secret, set AURAMATCH_AUTH__SECRET");
    }

    let users: Arc<dyn UserStore> = match settings.database.url() {
        Some(url) => {
            let pool = db::connect(url).await.context("failed to open database")?;
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            warn!("no database configured, accounts are kept in memory");
            Arc::new(MemoryUserStore::new())
        }
    };

    let addr = settings.server.addr.clone();
    info!(strategy = ?settings.matching.strategy, "initialising state");
    let router = build_router(AppState::new(settings, users));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install terminate handler");
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
}
