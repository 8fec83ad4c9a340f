/// HTTP request methods.
///
/// All nine request verbs are recognized; any other token maps to the
/// [`Method::UNKNOWN`] sentinel rather than an error, and the parser decides
/// what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// TRACE - Echo the received request
    TRACE,
    /// CONNECT - Establish a tunnel
    CONNECT,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Sentinel for any token that is not one of the nine verbs above
    UNKNOWN,
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is exact and case-sensitive. Anything else, including the
    /// empty string, yields [`Method::UNKNOWN`].
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::UNKNOWN);
    /// ```
    pub fn parse(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "TRACE" => Method::TRACE,
            "CONNECT" => Method::CONNECT,
            "PATCH" => Method::PATCH,
            _ => Method::UNKNOWN,
        }
    }

    /// Returns the wire form of the method.
    ///
    /// Every verb formats back to the token it was parsed from;
    /// [`Method::UNKNOWN`] formats to the literal string `"UNKNOWN"`.
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::request::Method;
    /// assert_eq!(Method::DELETE.as_str(), "DELETE");
    /// assert_eq!(Method::UNKNOWN.as_str(), "UNKNOWN");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::TRACE => "TRACE",
            Method::CONNECT => "CONNECT",
            Method::PATCH => "PATCH",
            Method::UNKNOWN => "UNKNOWN",
        }
    }
}

/// A single request header, exactly as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name, everything before the first `": "`
    pub name: String,
    /// Header value, everything after the first `": "`
    pub value: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Built by the parser and read-only afterwards; one request lives exactly as
/// long as its connection's worker. Headers keep their wire order and
/// duplicate names are kept as separate entries. The protocol version is
/// discarded during parsing and the body, if any, is never consumed.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path as written on the wire (e.g., "/index.html"),
    /// non-empty and not yet resolved against any document root
    pub path: String,
    /// Request headers in insertion order, capped at the parser's limit
    pub headers: Vec<Header>,
}

impl Request {
    /// Retrieves the first header value whose name matches, ignoring ASCII
    /// case as HTTP header names are case-insensitive in practice.
    ///
    /// Later duplicates are still present in [`Request::headers`]; this
    /// accessor only ever sees the first.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
