//! File content handling
//!
//! This module owns everything between the filesystem and the request handler:
//!
//! - **`loader`**: reads files from disk as text or raw bytes
//! - **`store`**: the in-memory cache for the two well-known resources
//! - **`watcher`**: the background task that refreshes the cache when the
//!   files change on disk

pub mod loader;
pub mod store;
pub mod watcher;

pub use store::{CacheStore, WellKnown};
