/// HTTP status codes emitted by the server.
///
/// Only the three statuses this server can actually send:
/// - `Ok` (200): file served
/// - `BadRequest` (400): path traversal attempt
/// - `NotFound` (404): no file even after the index fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

// The error bodies are fixed byte strings, trailing CRLF pairs included, so
// their Content-Length values (28 and 19) never drift from the payload.
const TRAVERSAL_BODY: &[u8] = b"Path traversal detected.\r\n\r\n";
const NOT_FOUND_BODY: &[u8] = b"File not found.\r\n\r\n";

/// A complete HTTP response, fully materialized before anything is written.
///
/// The wire format is fixed: status line, `Content-Type`, `Content-Length`
/// computed from the body, blank line, body. There is no header map because
/// no other header is ever sent.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the `Content-Type` header
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response carrying a file's contents.
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body,
        }
    }

    /// Creates the canned 400 response for a blocked traversal attempt.
    pub fn traversal_blocked() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: "text/plain",
            body: TRAVERSAL_BODY.to_vec(),
        }
    }

    /// Creates the canned 404 response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/plain",
            body: NOT_FOUND_BODY.to_vec(),
        }
    }
}
