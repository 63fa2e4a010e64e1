//! Server startup and shutdown.

use std::sync::Arc;

use hours_engine::InMemoryStore;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::routes::{create_router, AppState};

/// Build the store described by `config`: seeded from a file when
/// `store.seed_path` is set, empty otherwise.
///
/// # Errors
///
/// Returns an error if the seed file cannot be read or parsed.
pub fn build_store(config: &Config) -> Result<InMemoryStore> {
    match &config.store.seed_path {
        Some(path) => Ok(InMemoryStore::from_seed_file(path)?),
        None => {
            tracing::info!("no seed file configured, starting with an empty store");
            Ok(InMemoryStore::new())
        }
    }
}

/// Build the application state for `config`.
///
/// # Errors
///
/// See [`build_store`].
pub fn build_state(config: &Config) -> Result<AppState> {
    let store = build_store(config)?;
    Ok(AppState {
        store: Arc::new(store),
        missing_entity: config.store.missing_entity,
    })
}

/// Bind and serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the store cannot be built, the address is invalid, or
/// binding fails.
pub async fn serve(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let addr = config.listen_addr()?;
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        missing_entity = ?config.store.missing_entity,
        "washroom hours service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
