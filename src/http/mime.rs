//! MIME type classification for resolved file paths.
//!
//! Classification is a substring scan, not a real extension lookup: the first
//! table entry found anywhere in the path wins. A path containing `.html` in
//! the middle of a longer name classifies as HTML, and `.js` is checked before
//! `.json`, so any path containing `.json` classifies as
//! `application/javascript`.

const DEFAULT_TYPE: &str = "text/plain";

/// Checked in order; first containment match wins.
const TYPE_TABLE: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".xml", "application/xml"),
    (".txt", "text/plain"),
    (".woff2", "font/woff2"),
];

/// Returns the content type for a filesystem path.
///
/// Expects the fully resolved path, so a request for `/` served through the
/// index fallback classifies by `index.html`. Unmatched paths fall back to
/// `text/plain`.
pub fn classify(path: &str) -> &'static str {
    for &(fragment, content_type) in TYPE_TABLE {
        if path.contains(fragment) {
            return content_type;
        }
    }

    DEFAULT_TYPE
}
