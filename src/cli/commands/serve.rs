use anyhow::Context;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::app::app;
use crate::config::AppConfig;
use crate::database::{self, watchdog, PgStore, Store};
use crate::state::AppState;

/// Load config, build the pool, then serve until the listener or the store dies
pub async fn handle() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let pool = database::connect(&config.database).context("failed to create database pool")?;
    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let state = AppState::new(store.clone(), &config.security.jwt_secret);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("UniCRM API running on port {}", config.server.port);

    let server = axum::serve(listener, app(state, config.security.enable_cors));

    match config.database.health_check_interval_secs {
        0 => server.await.context("server error")?,
        secs => {
            tokio::select! {
                res = server.into_future() => res.context("server error")?,
                err = watchdog::watch(store, Duration::from_secs(secs)) => {
                    return Err(err).context("database connection lost");
                }
            }
        }
    }

    Ok(())
}
