use hotplate::http::parser::parse_path;
use hotplate::http::request::Request;

#[test]
fn test_parse_simple_path() {
    let raw = "GET /style.css HTTP/1.1\r\nHost: example.com\r\n\r\n";
    assert_eq!(parse_path(raw), "style.css");
}

#[test]
fn test_parse_root_is_slash() {
    // Empty extraction between the markers falls back to "/"
    let raw = "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    assert_eq!(parse_path(raw), "/");
}

#[test]
fn test_parse_missing_both_markers() {
    assert_eq!(parse_path("not an http request at all"), "/");
    assert_eq!(parse_path(""), "/");
}

#[test]
fn test_parse_missing_version_marker() {
    assert_eq!(parse_path("GET /index.html HTTP/1.0\r\n"), "/");
    assert_eq!(parse_path("GET /index.html"), "/");
}

#[test]
fn test_parse_missing_get_marker() {
    // Other methods don't carry the "GET /" marker and fall back to "/"
    assert_eq!(parse_path("POST /api HTTP/1.1\r\n"), "/");
    assert_eq!(parse_path("HEAD /index.html HTTP/1.1\r\n"), "/");
}

#[test]
fn test_parse_query_string_rides_along() {
    // No query parsing: the query string stays in the path and the later
    // file lookup simply fails for it
    let raw = "GET /search?q=rust HTTP/1.1\r\n";
    assert_eq!(parse_path(raw), "search?q=rust");
}

#[test]
fn test_parse_nested_path() {
    let raw = "GET /assets/img/logo.png HTTP/1.1\r\n";
    assert_eq!(parse_path(raw), "assets/img/logo.png");
}

#[test]
fn test_request_normalizes_root_to_index() {
    let req = Request::parse(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");
    assert_eq!(req.path, "index.html");
}

#[test]
fn test_request_keeps_other_paths() {
    let req = Request::parse(b"GET /style.css HTTP/1.1\r\n\r\n");
    assert_eq!(req.path, "style.css");
}

#[test]
fn test_request_from_empty_buffer() {
    // A failed or empty read serves the index page
    let req = Request::parse(b"");
    assert_eq!(req.path, "index.html");
}

#[test]
fn test_request_from_garbage_bytes() {
    let req = Request::parse(&[0xff, 0xfe, 0x00, 0x01]);
    assert_eq!(req.path, "index.html");
}
