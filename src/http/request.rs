use crate::content::WellKnown;
use crate::http::parser;

/// A parsed request. Lives for one connection: built from the raw read buffer
/// right after accept, dropped once the response is written.
#[derive(Debug, Clone)]
pub struct Request {
    /// The resolved resource path, relative to the document root
    /// (e.g. "style.css", "assets/logo.png").
    pub path: String,
}

impl Request {
    /// Builds a request from whatever a single socket read produced.
    ///
    /// The buffer is decoded lossily; only the request line matters and it is
    /// ASCII in practice. A path of `/` is normalized to the index page here,
    /// before any lookup happens.
    pub fn parse(buf: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(buf);
        let mut path = parser::parse_path(&raw);

        if path == "/" {
            path = WellKnown::Index.file_name().to_string();
        }

        Self { path }
    }
}
