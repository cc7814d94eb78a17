//! Blocking HTTP/1.1 client facade.
//!
//! # Design
//! `HttpClient` holds only its `ClientConfig`. Each call goes
//! resolve → build → connect → send → read until close → close → parse,
//! with a fresh `Connection` that never outlives the call. `build_*`
//! produce plain `HttpRequest` values so a caller can inspect or tweak a
//! request before handing it to `execute`.

use std::io::{self, Write};

use log::trace;

use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::parser::parse_response;
use crate::resolver::resolve;

#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_get(&self, url: &str, args: &[(&str, &str)]) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::get(&resolve(url)?, args))
    }

    pub fn build_post(&self, url: &str, args: &[(&str, &str)]) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::post(
            &resolve(url)?,
            args,
            self.config.form_content_type,
        ))
    }

    pub fn get(&self, url: &str, args: &[(&str, &str)]) -> Result<HttpResponse, ClientError> {
        self.execute(&self.build_get(url, args)?)
    }

    pub fn post(&self, url: &str, args: &[(&str, &str)]) -> Result<HttpResponse, ClientError> {
        self.execute(&self.build_post(url, args)?)
    }

    /// `POST` when `verb` is exactly `"POST"`, `GET` for anything else.
    pub fn command(
        &self,
        url: &str,
        verb: &str,
        args: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        match HttpMethod::from_verb(verb) {
            HttpMethod::Post => self.post(url, args),
            HttpMethod::Get => self.get(url, args),
        }
    }

    /// Send `request` on a new connection and parse whatever comes back
    /// once the server hangs up.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        self.execute_with_output(request, &mut io::stdout())
    }

    /// Like `execute`, but the `Headers: {json}` line goes to `out`
    /// instead of stdout.
    pub fn execute_with_output<W: Write>(
        &self,
        request: &HttpRequest,
        out: &mut W,
    ) -> Result<HttpResponse, ClientError> {
        let wire = request.to_wire();
        trace!("request:\n{wire}");

        let mut conn = Connection::connect(&request.host, request.port)?;
        conn.send(wire.as_bytes())?;
        let raw = conn.read_to_close(self.config.read_chunk_size)?;
        conn.close();

        let parsed = parse_response(&raw)?;
        if self.config.print_headers {
            writeln!(out, "Headers: {}", parsed.headers)?;
        }
        Ok(parsed.into_response())
    }
}
