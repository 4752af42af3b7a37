use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, warn};

use crate::database::store::{Store, StoreError};

/// Ping the store every `period` until a ping fails fatally, then hand back the error.
///
/// A saturated or closing pool only logs a warning. A dead store is
/// unrecoverable for this process; the caller is expected to shut down rather
/// than reconnect.
pub async fn watch(store: Arc<dyn Store>, period: Duration) -> StoreError {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match store.ping().await {
            Ok(()) => debug!("Database ping ok"),
            Err(e) if !e.is_fatal() => warn!("Database ping skipped: {}", e),
            Err(e) => {
                error!("Unexpected error on idle database client: {}", e);
                return e;
            }
        }
    }
}
