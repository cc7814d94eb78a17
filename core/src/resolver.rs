//! URL decomposition into the pieces a raw HTTP request needs.
//!
//! # Design
//! Parsing itself is delegated to the `url` crate; this module only applies
//! the client's rules on top: default ports per scheme, `"/"` for an empty
//! path, and a hard error for schemes with no known port. Nothing here
//! touches the network.

use ::url::Url;

use crate::error::ClientError;

/// Default port for the schemes the client understands.
fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Host, port and request path extracted from a URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Option<String>,
}

impl ParsedUrl {
    /// The request-target sent on the request line: the path, plus the
    /// query string when the URL carried one.
    pub fn request_target(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Split `url` into scheme, host, port and path.
///
/// An explicit port always wins. Otherwise `http` maps to 80 and `https`
/// to 443; any other scheme is rejected with `UnsupportedScheme`.
pub fn resolve(url: &str) -> Result<ParsedUrl, ClientError> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ClientError::InvalidUrl(format!("{url}: missing host")))?
        .to_string();

    // `Url::port` hides a port equal to the scheme's well-known default,
    // so http://h:80 and http://h both land in the fallback branch.
    let port = match parsed.port() {
        Some(port) => port,
        None => default_port(parsed.scheme())
            .ok_or_else(|| ClientError::UnsupportedScheme(parsed.scheme().to_string()))?,
    };

    let path = match parsed.path() {
        "" => "/".to_string(),
        p => p.to_string(),
    };

    Ok(ParsedUrl {
        scheme: parsed.scheme().to_string(),
        host,
        port,
        path,
        query: parsed.query().map(str::to_string),
    })
}
