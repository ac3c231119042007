//! Hotplate - static file server with a hot cache
//!
//! Serves files from a document root over HTTP/1.1, keeping the two well-known
//! files (`index.html`, `style.css`) in memory and reloading them from disk
//! when they change.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
