//! Error types for the raw HTTP client.
//!
//! # Design
//! One enum covers every stage of a call: URL resolution, connecting,
//! socket I/O, UTF-8 decoding, and response parsing. Parse failures get a
//! dedicated variant each so callers (and tests) can tell a truncated
//! response from a garbled status line without string matching.

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors returned by `HttpClient` and the free-standing resolve/parse
/// functions.
#[derive(Debug)]
pub enum ClientError {
    /// The input could not be parsed as a URL, or it has no host.
    InvalidUrl(String),

    /// No explicit port was given and the scheme has no known default.
    UnsupportedScheme(String),

    /// Resolving or connecting to `host:port` failed.
    Connect {
        host: String,
        port: u16,
        source: io::Error,
    },

    /// Writing the request or reading the response failed mid-stream.
    Io(io::Error),

    /// The response bytes are not valid UTF-8.
    InvalidUtf8(FromUtf8Error),

    /// No blank line (`\r\n\r\n`) separates the headers from the body.
    MissingHeaderTerminator,

    /// The status line has no second token, or it is not numeric.
    MalformedStatusLine(String),

    /// A header line has no colon.
    MalformedHeader(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            ClientError::UnsupportedScheme(scheme) => {
                write!(f, "no default port for scheme {scheme:?}")
            }
            ClientError::Connect { host, port, source } => {
                write!(f, "failed to connect to {host}:{port}: {source}")
            }
            ClientError::Io(e) => write!(f, "socket I/O failed: {e}"),
            ClientError::InvalidUtf8(e) => write!(f, "response is not valid UTF-8: {e}"),
            ClientError::MissingHeaderTerminator => {
                write!(f, "malformed response: no blank line between headers and body")
            }
            ClientError::MalformedStatusLine(line) => {
                write!(f, "malformed status line: {line:?}")
            }
            ClientError::MalformedHeader(line) => {
                write!(f, "malformed header line: {line:?}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connect { source, .. } => Some(source),
            ClientError::Io(e) => Some(e),
            ClientError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(e: io::Error) -> Self {
        ClientError::Io(e)
    }
}

impl From<FromUtf8Error> for ClientError {
    fn from(e: FromUtf8Error) -> Self {
        ClientError::InvalidUtf8(e)
    }
}
