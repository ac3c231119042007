//! Background refresh of the cache store.
//!
//! The watcher polls the modification time of both well-known files on a fixed
//! interval and reloads an entry whenever its timestamp no longer matches the
//! cached one. A file that disappears stats to `None`, which differs from the
//! stored timestamp exactly once, so it is reloaded to empty content a single
//! time and then left alone until it reappears.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Config;
use crate::content::loader;
use crate::content::store::{CacheStore, WellKnown};

/// One poll pass: checks the page first, then the stylesheet.
pub async fn refresh(store: &CacheStore, root: &Path) {
    for which in WellKnown::ALL {
        let path = root.join(which.file_name());
        let new_time = loader::mod_time(&path).await;
        let old_time = store.mod_time(which).await;

        if new_time != old_time {
            let content = loader::read_text(&path).await;
            tracing::info!(
                resource = which.file_name(),
                bytes = content.len(),
                "reloaded cached file"
            );
            store.set(which, content, new_time).await;
        }
    }
}

/// Watcher task: polls until the shutdown signal fires.
///
/// Runs for the lifetime of the process; `main` owns the `JoinHandle` and
/// gives it a bounded grace period at shutdown.
pub async fn run(store: CacheStore, cfg: Arc<Config>, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(cfg.poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh(&store, &cfg.root).await;
            }
            _ = shutdown.changed() => {
                tracing::debug!("file watcher stopping");
                break;
            }
        }
    }
}
