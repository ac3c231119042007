//! In-memory cache for the two well-known resources.

use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

use crate::content::loader;

/// The resources eligible for caching and watching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnown {
    /// The HTML page, `index.html`
    Index,
    /// The stylesheet, `style.css`
    Stylesheet,
}

impl WellKnown {
    /// Fixed check order for the watcher: the page before the stylesheet.
    pub const ALL: [WellKnown; 2] = [WellKnown::Index, WellKnown::Stylesheet];

    /// File name of the resource, relative to the document root.
    pub fn file_name(self) -> &'static str {
        match self {
            WellKnown::Index => "index.html",
            WellKnown::Stylesheet => "style.css",
        }
    }
}

/// A cached file: its text content and the modification timestamp it was
/// loaded at. `mod_time` is `None` while the file is absent on disk.
#[derive(Debug, Default, Clone)]
pub struct CachedResource {
    pub content: String,
    pub mod_time: Option<SystemTime>,
}

/// Shared handle to the cache.
///
/// Cloning is cheap and clones see the same entries. Each entry keeps content
/// and timestamp under one lock so a reader always observes a pair produced by
/// the same update; the watcher is the only writer.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    index: Arc<RwLock<CachedResource>>,
    stylesheet: Arc<RwLock<CachedResource>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, which: WellKnown) -> &Arc<RwLock<CachedResource>> {
        match which {
            WellKnown::Index => &self.index,
            WellKnown::Stylesheet => &self.stylesheet,
        }
    }

    /// Maps a normalized request path to its cache entry, if it has one.
    pub fn lookup(path: &str) -> Option<WellKnown> {
        WellKnown::ALL.into_iter().find(|w| w.file_name() == path)
    }

    /// Content and timestamp of an entry, read as a pair.
    pub async fn get(&self, which: WellKnown) -> (String, Option<SystemTime>) {
        let entry = self.slot(which).read().await;
        (entry.content.clone(), entry.mod_time)
    }

    /// Content of an entry.
    pub async fn content(&self, which: WellKnown) -> String {
        self.slot(which).read().await.content.clone()
    }

    /// Timestamp the entry was last loaded at.
    pub async fn mod_time(&self, which: WellKnown) -> Option<SystemTime> {
        self.slot(which).read().await.mod_time
    }

    /// Replaces an entry. Content and timestamp are stored together, under
    /// the same write lock.
    pub async fn set(&self, which: WellKnown, content: String, mod_time: Option<SystemTime>) {
        let mut entry = self.slot(which).write().await;
        entry.content = content;
        entry.mod_time = mod_time;
    }

    /// Loads both well-known files once, before the server starts accepting.
    /// The watcher only has to track changes from here on.
    pub async fn populate(&self, root: &Path) {
        for which in WellKnown::ALL {
            let path = root.join(which.file_name());
            let mod_time = loader::mod_time(&path).await;
            let content = loader::read_text(&path).await;
            tracing::debug!(
                resource = which.file_name(),
                bytes = content.len(),
                "cached initial content"
            );
            self.set(which, content, mod_time).await;
        }
    }
}
