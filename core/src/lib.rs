//! Minimal HTTP/1.1 client written directly against `std::net::TcpStream`.
//!
//! # Overview
//! Requests are built as literal HTTP/1.1 text, written to a fresh TCP
//! connection, and the raw response is read until the server closes and
//! then split into status code, headers and body by hand. No HTTP library
//! sits in between.
//!
//! # Design
//! - `HttpClient` holds configuration only; every call owns its own
//!   `Connection` and closes it before returning.
//! - Request building (`HttpRequest`) and response parsing
//!   (`parse_response`) are pure, so the wire format is testable without
//!   a socket.
//! - Every request says `Connection: close`; end-of-stream marks the end
//!   of the response. No keep-alive, chunked encoding, redirects or TLS.

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod parser;
pub mod resolver;

pub use client::HttpClient;
pub use config::{ClientConfig, FormContentType};
pub use connection::Connection;
pub use error::ClientError;
pub use http::{encode_form, Headers, HttpMethod, HttpRequest, HttpResponse};
pub use parser::{parse_response, ParsedResponse};
pub use resolver::{resolve, ParsedUrl};
