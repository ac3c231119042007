use hotplate::http::mime;

#[test]
fn test_resolve_all_supported_extensions() {
    let cases = vec![
        ("index.html", "text/html"),
        ("style.css", "text/css"),
        ("app.js", "application/javascript"),
        ("logo.png", "image/png"),
        ("photo.jpg", "image/jpeg"),
        ("photo.jpeg", "image/jpeg"),
        ("anim.gif", "image/gif"),
        ("icon.svg", "image/svg+xml"),
        ("favicon.ico", "image/x-icon"),
    ];

    for (path, expected) in cases {
        assert_eq!(mime::resolve(path), expected, "path: {}", path);
    }
}

#[test]
fn test_resolve_unmatched_extension_is_binary_default() {
    assert_eq!(mime::resolve("notes.txt"), "application/octet-stream");
    assert_eq!(mime::resolve("archive.tar.gz"), "application/octet-stream");
    assert_eq!(mime::resolve("Makefile"), "application/octet-stream");
}

#[test]
fn test_resolve_no_extension() {
    assert_eq!(mime::resolve("README"), "application/octet-stream");
    assert_eq!(mime::resolve(""), "application/octet-stream");
}

#[test]
fn test_resolve_is_case_sensitive() {
    // Only lowercase extensions are in the table
    assert_eq!(mime::resolve("INDEX.HTML"), "application/octet-stream");
    assert_eq!(mime::resolve("style.CSS"), "application/octet-stream");
}

#[test]
fn test_resolve_nested_path() {
    assert_eq!(mime::resolve("assets/img/logo.png"), "image/png");
    assert_eq!(mime::resolve("css/theme.css"), "text/css");
}

#[test]
fn test_textual_types() {
    assert!(mime::is_textual("text/html"));
    assert!(mime::is_textual("text/css"));
    assert!(mime::is_textual("text/plain"));
}

#[test]
fn test_javascript_is_not_textual() {
    // application/javascript fails the text/ prefix test, so .js files take
    // the uncached binary load path
    let js_type = mime::resolve("app.js");
    assert_eq!(js_type, "application/javascript");
    assert!(!mime::is_textual(js_type));
}

#[test]
fn test_binary_types_are_not_textual() {
    assert!(!mime::is_textual("image/png"));
    assert!(!mime::is_textual("application/octet-stream"));
}
