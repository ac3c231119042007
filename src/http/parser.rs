const PATH_START: &str = "GET /";
const PATH_END: &str = " HTTP/1.1";

/// Extracts the requested path from a raw request.
///
/// Returns the substring strictly between the literal `GET /` and ` HTTP/1.1`
/// markers. If either marker is missing, or the extracted path is empty, the
/// root path `/` is returned — so any other method or a malformed line falls
/// back to serving the index page. Nothing else in the request is inspected;
/// a query string rides along verbatim in the returned path.
pub fn parse_path(raw: &str) -> String {
    let Some(start) = raw.find(PATH_START) else {
        return "/".to_string();
    };

    let after = &raw[start + PATH_START.len()..];
    let Some(end) = after.find(PATH_END) else {
        return "/".to_string();
    };

    let path = &after[..end];
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
