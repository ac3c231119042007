use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use hotplate::config::Config;
use hotplate::content::{watcher, CacheStore};
use hotplate::server;

/// How long the watcher gets to finish its current poll at shutdown.
const WATCHER_GRACE: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::default());
    let store = CacheStore::new();

    // Both well-known files are cached before the first accept, so early
    // requests never depend on the watcher having run.
    store.populate(&cfg.root).await;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut watcher_task = tokio::spawn(watcher::run(store.clone(), cfg.clone(), shutdown_rx));

    tokio::select! {
        res = server::listener::run(cfg.clone(), store.clone()) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    // The accept loop is gone; give the watcher a bounded grace period.
    let _ = shutdown_tx.send(true);
    if tokio::time::timeout(WATCHER_GRACE, &mut watcher_task)
        .await
        .is_err()
    {
        tracing::warn!("file watcher did not stop in time, aborting it");
        watcher_task.abort();
    }

    Ok(())
}
