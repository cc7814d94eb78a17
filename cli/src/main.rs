//! `httpclient [METHOD] URL` — send one GET or POST over a raw socket and
//! print the status code and body.
//!
//! Set `RUST_LOG=debug` to see connection and byte-count logging from the
//! core crate.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::Env;
use httpclient_core::{HttpClient, HttpResponse};

const USAGE: &str = "usage: httpclient [GET|POST] URL";

/// What to run, decided from the positional arguments.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    verb: String,
    url: String,
}

impl Invocation {
    /// `args` excludes the program name. One token is a URL fetched with
    /// GET; two are `METHOD URL`. Beyond two, only the first is used, as
    /// the URL. Nothing at all is a usage error.
    fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [] => None,
            [verb, url] => Some(Self {
                verb: verb.clone(),
                url: url.clone(),
            }),
            [url, ..] => Some(Self {
                verb: "GET".to_string(),
                url: url.clone(),
            }),
        }
    }
}

fn run(invocation: &Invocation) -> Result<HttpResponse> {
    log::debug!("{} {}", invocation.verb, invocation.url);
    HttpClient::new()
        .command(&invocation.url, &invocation.verb, &[])
        .with_context(|| format!("{} {} failed", invocation.verb, invocation.url))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = Invocation::from_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&invocation) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_usage_error() {
        assert_eq!(Invocation::from_args(&[]), None);
    }

    #[test]
    fn url_only_defaults_to_get() {
        let inv = Invocation::from_args(&args(&["http://example.com"])).unwrap();
        assert_eq!(inv.verb, "GET");
        assert_eq!(inv.url, "http://example.com");
    }

    #[test]
    fn method_then_url() {
        let inv = Invocation::from_args(&args(&["POST", "http://example.com/f"])).unwrap();
        assert_eq!(inv.verb, "POST");
        assert_eq!(inv.url, "http://example.com/f");
    }

    #[test]
    fn extra_tokens_take_first_as_url() {
        let inv = Invocation::from_args(&args(&["http://a", "x", "y"])).unwrap();
        assert_eq!(inv.verb, "GET");
        assert_eq!(inv.url, "http://a");
    }

    #[test]
    fn run_reports_unsupported_scheme_with_context() {
        let inv = Invocation {
            verb: "GET".to_string(),
            url: "gopher://example.com/".to_string(),
        };
        let err = run(&inv).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("GET gopher://example.com/ failed"));
        assert!(rendered.contains("gopher"));
    }
}
