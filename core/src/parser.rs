//! Raw HTTP/1.1 response parsing.
//!
//! The blank-line boundary is located exactly once; the status line,
//! headers and body are all sliced from that single split so they can
//! never disagree about where the head ends.

use crate::error::ClientError;
use crate::http::{Headers, HttpResponse};

const BOUNDARY: &str = "\r\n\r\n";

/// Everything the parser extracts from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub code: u16,
    pub headers: Headers,
    pub body: String,
}

impl ParsedResponse {
    /// Drop the headers, keeping code and body.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse {
            code: self.code,
            body: self.body,
        }
    }
}

/// Parse decoded response text into status code, headers and body.
pub fn parse_response(raw: &str) -> Result<ParsedResponse, ClientError> {
    let (head, body) = raw
        .split_once(BOUNDARY)
        .ok_or(ClientError::MissingHeaderTerminator)?;

    let (status_line, header_block) = match head.split_once("\r\n") {
        Some((status, rest)) => (status, Some(rest)),
        None => (head, None),
    };

    let code = parse_status_code(status_line)?;

    let mut headers = Headers::new();
    for line in header_block.into_iter().flat_map(|block| block.split("\r\n")) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ClientError::MalformedHeader(line.to_string()))?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(ParsedResponse {
        code,
        headers,
        body: body.to_string(),
    })
}

/// Second space-separated token of the status line, as an integer.
fn parse_status_code(status_line: &str) -> Result<u16, ClientError> {
    status_line
        .split(' ')
        .nth(1)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ClientError::MalformedStatusLine(status_line.to_string()))
}
