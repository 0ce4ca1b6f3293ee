//! Raw request/response dump middleware.
//!
//! When installed, each request and its response are printed to standard
//! output in full (request line, headers, body). The call surface installs
//! this layer when per-call debugging or the process-wide toggle
//! ([`crate::debug_on`]) is active. Dumps go to stdout by contract, not
//! through `tracing`.

use std::fmt::Write as _;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Layer that prints raw request/response dumps to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpLayer;

impl DumpLayer {
    /// Create a new dump layer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for DumpLayer {
    type Service = Dump<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Dump { inner }
    }
}

/// Service that prints raw request/response dumps to standard output.
#[derive(Debug, Clone)]
pub struct Dump<S> {
    inner: S,
}

impl<S> Service<Request> for Dump<S>
where
    S: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    #[allow(clippy::print_stdout)]
    fn call(&mut self, request: Request) -> Self::Future {
        println!("---> [HTTP Request] {}", dump_request(&request));

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let result = inner.call(request).await;

            match &result {
                Ok(response) => {
                    println!("<--- [HTTP Response] {}", dump_response(response));
                }
                Err(err) if err.is_timeout() => {
                    println!("<--- [HTTP Response] timeout\n");
                }
                Err(_) => {}
            }

            result
        })
    }
}

/// Render a request as a raw HTTP-style dump.
fn dump_request(request: &Request) -> String {
    let mut dump = String::new();

    let path_and_query = match request.url().query() {
        Some(query) => format!("{}?{query}", request.url().path()),
        None => request.url().path().to_string(),
    };
    let _ = writeln!(dump, "{} {path_and_query} HTTP/1.1", request.method());

    if let Some(host) = request.url().host_str() {
        let _ = writeln!(dump, "Host: {host}");
    }
    for (name, value) in sorted_headers(request.headers()) {
        let _ = writeln!(dump, "{name}: {value}");
    }

    dump.push_str("[Request Body]\n");
    if let Some(body) = request.body() {
        dump.push_str(&String::from_utf8_lossy(body));
    }
    dump.push('\n');
    dump
}

/// Render a response as a raw HTTP-style dump.
fn dump_response(response: &Response) -> String {
    let mut dump = String::new();

    let _ = writeln!(dump, "HTTP/1.1 {}", response.status());
    for (name, value) in sorted_headers(response.headers()) {
        let _ = writeln!(dump, "{name}: {value}");
    }

    dump.push_str("[Response Body]\n");
    dump.push_str(&response.text());
    dump.push('\n');
    dump
}

fn sorted_headers(
    headers: &std::collections::HashMap<String, String>,
) -> Vec<(&String, &String)> {
    let mut entries: Vec<_> = headers.iter().collect();
    entries.sort_by_key(|(name, _)| name.to_lowercase());
    entries
}
