//! Whole-file reads with failure mapped to "empty".
//!
//! A file that is missing, unreadable, or (for the text path) not valid UTF-8
//! loads as empty content. The request handler turns empty content into a 404,
//! so these functions never need to report an error themselves.

use std::path::Path;
use std::time::SystemTime;

/// Reads the entire file as text. Empty string on any failure.
pub async fn read_text(path: &Path) -> String {
    tokio::fs::read_to_string(path).await.unwrap_or_default()
}

/// Reads the entire file as raw bytes. Empty vec on any failure; a partial
/// read surfaces as an error from tokio and lands here too.
pub async fn read_binary(path: &Path) -> Vec<u8> {
    tokio::fs::read(path).await.unwrap_or_default()
}

/// Modification timestamp of the file, or `None` when stat fails (file
/// missing or inaccessible).
pub async fn mod_time(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path).await.ok()?.modified().ok()
}
