//! HTTP/1.1 request and response values, and the request serializer.
//!
//! # Design
//! These types describe requests and responses as plain data. Building an
//! `HttpRequest` and turning it into wire text never touches the network;
//! `Connection` and `HttpClient` are the only I/O. That keeps the
//! serializer exact-text testable.
//!
//! Every request carries `Connection: close`: the response reader relies
//! on the server hanging up to know the response is complete.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::FormContentType;
use crate::resolver::ParsedUrl;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Map a verb string onto a method. Only the exact string `"POST"`
    /// selects POST; everything else, including unknown verbs, is GET.
    pub fn from_verb(verb: &str) -> Self {
        match verb {
            "POST" => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL-form-encode `args` in input order. No args gives an empty string.
pub fn encode_form(args: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(args)
        .finish()
}

/// A request ready to be written to a socket.
///
/// `host`/`port` say where to connect; `path` is the request-target that
/// goes on the request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// `GET` with `Host` and `Connection: close`. Any `args` are
    /// form-encoded onto the query string.
    pub fn get(url: &ParsedUrl, args: &[(&str, &str)]) -> Self {
        let mut path = url.request_target();
        if !args.is_empty() {
            // A bare trailing `?` already ends the target.
            match url.query.as_deref() {
                None => path.push('?'),
                Some("") => {}
                Some(_) => path.push('&'),
            }
            path.push_str(&encode_form(args));
        }

        HttpRequest {
            method: HttpMethod::Get,
            host: url.host.clone(),
            port: url.port,
            path,
            headers: vec![
                ("Host".to_string(), url.host.clone()),
                ("Connection".to_string(), "close".to_string()),
            ],
            body: None,
        }
    }

    /// `POST` whose body is the form-encoded `args`, labelled with
    /// `content_type` and sized in bytes by `Content-Length`.
    pub fn post(url: &ParsedUrl, args: &[(&str, &str)], content_type: FormContentType) -> Self {
        let body = encode_form(args);

        HttpRequest {
            method: HttpMethod::Post,
            host: url.host.clone(),
            port: url.port,
            path: url.request_target(),
            headers: vec![
                ("Host".to_string(), url.host.clone()),
                ("Content-Type".to_string(), content_type.as_str().to_string()),
                ("Content-Length".to_string(), body.len().to_string()),
                ("Connection".to_string(), "close".to_string()),
            ],
            body: Some(body),
        }
    }

    /// Serialize to literal HTTP/1.1 text: request line, one line per
    /// header, a blank line, then the body if there is one.
    pub fn to_wire(&self) -> String {
        let mut out = format!("{} {} HTTP/1.1\r\n", self.method, self.path);
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
        out.push_str("\r\n");
        if let Some(body) = &self.body {
            out.push_str(body);
        }
        out
    }
}

/// Response headers in arrival order. Re-inserting a name overwrites the
/// earlier value where it stands, so the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Renders as a JSON object, e.g. `{"Content-Type":"text/plain"}`.
impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// What a GET/POST call hands back: the status code and the body text.
/// Headers are reported during the call but not kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    pub code: u16,
    pub body: String,
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {}\r\nBody: {}", self.code, self.body)
    }
}
