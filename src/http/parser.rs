use crate::http::request::{Header, Method, Request};

/// Maximum accepted length of the method token.
pub const MAX_METHOD_LEN: usize = 16;
/// Maximum accepted length of the request path.
pub const MAX_PATH_LEN: usize = 256;
/// Header entries kept per request; lines past this are silently ignored.
pub const MAX_HEADERS: usize = 50;
/// Maximum accepted length of a header name.
pub const MAX_HEADER_NAME_LEN: usize = 256;
/// Maximum accepted length of a header value.
pub const MAX_HEADER_VALUE_LEN: usize = 256;

#[derive(Debug)]
pub enum ParseError {
    InvalidEncoding,
    Empty,
    MalformedRequestLine,
    MethodTooLong,
    UnknownMethod,
    PathTooLong,
    MalformedHeader,
    HeaderNameTooLong,
    HeaderValueTooLong,
}

/// Parses one raw request buffer into a [`Request`].
///
/// The buffer is split on runs of CR and LF, so the blank line that ends the
/// header section never shows up as a line of its own and parsing simply
/// stops when the lines run out. Bodies are not consumed: any body bytes
/// still in the buffer are seen as header lines and will usually fail the
/// `": "` check. Every length bound is enforced explicitly; an over-long
/// field is an error, never a truncation.
pub fn parse_request(raw: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text.split(['\r', '\n']).filter(|line| !line.is_empty());

    let request_line = lines.next().ok_or(ParseError::Empty)?;
    let (method, path) = parse_request_line(request_line)?;

    let mut headers = Vec::new();
    for line in lines {
        if headers.len() == MAX_HEADERS {
            break;
        }

        let (name, value) = line.split_once(": ").ok_or(ParseError::MalformedHeader)?;

        if name.len() > MAX_HEADER_NAME_LEN {
            return Err(ParseError::HeaderNameTooLong);
        }
        if value.len() > MAX_HEADER_VALUE_LEN {
            return Err(ParseError::HeaderValueTooLong);
        }

        headers.push(Header {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    Ok(Request {
        method,
        path,
        headers,
    })
}

fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
    let (token, rest) = line.split_once(' ').ok_or(ParseError::MalformedRequestLine)?;

    // The version after the second space is discarded without validation.
    let (path, _version) = rest.split_once(' ').ok_or(ParseError::MalformedRequestLine)?;

    if token.len() > MAX_METHOD_LEN {
        return Err(ParseError::MethodTooLong);
    }

    let method = Method::parse(token);
    if method == Method::UNKNOWN {
        return Err(ParseError::UnknownMethod);
    }

    if path.is_empty() {
        return Err(ParseError::MalformedRequestLine);
    }
    if path.len() > MAX_PATH_LEN {
        return Err(ParseError::PathTooLong);
    }

    Ok((method, path.to_string()))
}
