//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: only the request line is inspected,
//! every response carries `Connection: close`, and each connection serves
//! exactly one request.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection handler; reads the request, resolves
//!   content, writes the response
//! - **`parser`**: extracts the requested path from the raw request line
//! - **`request`**: the per-connection request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection lifecycle
//!
//! ```text
//! accept → read (one buffer) → parse path → resolve content → write → close
//! ```
//!
//! There is no keep-alive: the response headers announce the close and the
//! handler drops the stream as soon as the write returns.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
