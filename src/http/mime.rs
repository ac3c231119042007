//! MIME type detection based on file extensions.

/// Fallback for anything the table below does not match.
pub const OCTET_STREAM: &str = "application/octet-stream";

// Suffix match is exact and case-sensitive; ".HTML" falls through to the
// binary default.
const TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".ico", "image/x-icon"),
];

/// Resolves a request path to a MIME type by its extension.
pub fn resolve(path: &str) -> &'static str {
    TYPES
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}

/// A type is textual iff it is under `text/`. This drives which load path a
/// resource takes: textual content may be served from the cache, everything
/// else is read fresh as bytes. Note that `application/javascript` does not
/// qualify, so `.js` files always take the binary path.
pub fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/")
}
