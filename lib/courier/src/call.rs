//! The call surface: one configured HTTP round trip per [`Options`].

use courier_core::HttpClient;
use serde::de::DeserializeOwned;

use crate::debug::debug_enabled;
use crate::{HyperClient, Method, Options, PayloadKind, Request, Response, Result};

/// Retry attempts used when [`Options::retry`] is set.
const RETRY_ATTEMPTS: u32 = 3;

/// Send a GET request with options.
///
/// # Errors
///
/// Returns an error on an invalid URL or a transport-level failure.
pub async fn get(url: impl Into<String>, mut opt: Options) -> Result<Response> {
    opt.url = url.into();
    opt.method = Some(Method::Get);
    call(opt).await
}

/// Send a POST request with options.
///
/// # Errors
///
/// Returns an error on an invalid URL or a transport-level failure.
pub async fn post(url: impl Into<String>, mut opt: Options) -> Result<Response> {
    opt.url = url.into();
    opt.method = Some(Method::Post);
    call(opt).await
}

/// Send a PUT request with options.
///
/// # Errors
///
/// Returns an error on an invalid URL or a transport-level failure.
pub async fn put(url: impl Into<String>, mut opt: Options) -> Result<Response> {
    opt.url = url.into();
    opt.method = Some(Method::Put);
    call(opt).await
}

/// Send a DELETE request with options.
///
/// # Errors
///
/// Returns an error on an invalid URL or a transport-level failure.
pub async fn delete(url: impl Into<String>, mut opt: Options) -> Result<Response> {
    opt.url = url.into();
    opt.method = Some(Method::Delete);
    call(opt).await
}

/// Send an HTTP request described by `opt`.
///
/// Middleware is installed in a fixed order - caller plugins, user-agent,
/// basic auth, bearer, retry, dump - and the request is assembled in a
/// fixed order: custom headers, query parameters, payload body (with its
/// content type), then the explicit `Content-Type` override. Later steps
/// win where they touch the same header.
///
/// A transport-level failure returns the error as-is; no decoding is
/// attempted. A received response is returned whatever its status.
///
/// # Errors
///
/// Returns an error on an invalid URL, a payload that fails to encode, or
/// a transport-level failure.
pub async fn call(opt: Options) -> Result<Response> {
    let url = url::Url::parse(&opt.url)?;

    let mut builder = HyperClient::builder();
    if let Some(timeout) = opt.timeout {
        builder = builder.timeout(timeout);
    }
    for hook in opt.plugins {
        builder = builder.plugin(hook);
    }
    if let Some(user_agent) = opt.user_agent {
        builder = builder.with_user_agent(user_agent);
    }
    if let Some((username, password)) = opt.basic_auth {
        builder = builder.with_basic_auth(username, password);
    }
    if let Some(token) = opt.bearer {
        builder = builder.with_bearer_auth(token);
    }
    if opt.retry {
        builder = builder.with_retry(RETRY_ATTEMPTS);
    }
    if opt.debug || debug_enabled() {
        builder = builder.with_dump();
    }
    let client = builder.build();

    let mut request = Request::builder(opt.method.unwrap_or(Method::Get), url)
        .headers(opt.headers);
    if let Some(query) = opt.query {
        request = request.query_pairs(query.pairs());
    }
    if let Some(payload) = opt.payload {
        let (content_type, body) = payload.into_body()?;
        if let Some(content_type) = content_type {
            request = request.header("Content-Type", content_type);
        }
        request = request.body(body);
    }
    if let Some(content_type) = opt.content_type {
        request = request.header("Content-Type", content_type);
    }

    client.execute(request.build()).await
}

/// Send an HTTP request and decode the response body into `T`.
///
/// The body decodes as XML when the request payload was XML, and as JSON
/// otherwise. Failures are reported in a fixed priority: transport error,
/// then status-code error, then decode error.
///
/// # Errors
///
/// Returns the first of: transport error, [`crate::Error::Status`] for a
/// non-2xx response, or a decode error.
pub async fn call_with_result<T: DeserializeOwned>(opt: Options) -> Result<T> {
    let expect_xml = opt
        .payload
        .as_ref()
        .is_some_and(|payload| payload.kind() == PayloadKind::Xml);

    let response = call(opt).await?;
    response.error_for_status()?;

    if expect_xml {
        response.xml()
    } else {
        response.json()
    }
}
