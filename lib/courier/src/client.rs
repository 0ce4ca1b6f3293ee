//! HTTP client implementation using hyper-util.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::retry::RetryLayer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::middleware::{
    BasicAuthLayer, BearerAuthLayer, DumpLayer, LoggingLayer, RetryPolicy, UserAgentLayer,
};
use crate::{Error, Request, Response, Result};

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Request, Response, Error>;

/// Future type for Tower Service implementations.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// An extension hook: a boxed layer application over the client's service
/// stack.
///
/// Plugins compose like any other layer; build one from a Tower [`Layer`]
/// with [`plugin`].
pub type Plugin = Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>;

/// Box a Tower [`Layer`] into a [`Plugin`] usable in
/// [`crate::Options::plugins`].
pub fn plugin<L>(layer: L) -> Plugin
where
    L: Layer<BoxedService> + Send + Sync + 'static,
    L::Service: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
    <L::Service as Service<Request>>::Future: Send,
{
    Arc::new(move |service| BoxCloneService::new(layer.layer(service)))
}

/// Thread-safe wrapper for [`BoxedService`].
///
/// A Mutex makes the service Sync, as required by the `HttpClient` trait.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request) -> ServiceFuture {
        // Lock, clone the service, and release the lock immediately
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

// ============================================================================
// Raw Client (internal, direct hyper access)
// ============================================================================

/// Create an HTTPS connector with rustls and the Mozilla root certificates.
fn https_connector() -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}

/// Raw HTTP client using hyper-util (internal implementation).
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl RawHyperClient {
    fn new(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector());

        Self { inner, config }
    }

    /// Build a hyper request from a courier request.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        let hyper_request = Self::build_hyper_request(request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(hyper_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, response_headers, body))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Service<Request> for RawHyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// HTTP client using hyper-util with connection pooling, TLS, and Tower
/// middleware support.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use courier::HyperClient;
///
/// let client = HyperClient::builder()
///     .timeout(Duration::from_secs(10))
///     .with_retry(3)
///     .with_bearer_auth("my-token")
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration and no middleware.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration and no middleware.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let raw = RawHyperClient::new(config.clone());
        Self {
            service: SyncService::new(BoxCloneService::new(raw)),
            config,
        }
    }

    /// Create a client with a pre-composed service (used by the builder).
    fn with_service(service: BoxedService, config: ClientConfig) -> Self {
        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl courier_core::HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.service.call(request).await
    }
}

impl Service<Request> for HyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperClient`].
///
/// Middleware is applied in the order added: the first layer added is the
/// first to see each outgoing request.
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    layers: Vec<Plugin>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl HyperClientBuilder {
    // ========================================================================
    // Core Configuration
    // ========================================================================

    /// Set the request timeout (enforced at the transport level).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    // ========================================================================
    // Middleware
    // ========================================================================

    /// Add a Tower layer to the client.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(plugin(layer));
        self
    }

    /// Add a pre-boxed plugin to the client.
    #[must_use]
    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.layers.push(plugin);
        self
    }

    /// Add retry middleware with the given number of retries.
    ///
    /// Uses the default retry policy: retries on 5xx, 429, connection
    /// errors, and timeouts.
    #[must_use]
    pub fn with_retry(self, max_retries: u32) -> Self {
        self.layer(RetryLayer::new(RetryPolicy::new(max_retries)))
    }

    /// Add a `User-Agent` header to every request.
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.layer(UserAgentLayer::new(user_agent))
    }

    /// Add basic authentication.
    #[must_use]
    pub fn with_basic_auth(self, username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        self.layer(BasicAuthLayer::new(username, password))
    }

    /// Add bearer token authentication.
    #[must_use]
    pub fn with_bearer_auth(self, token: impl Into<String>) -> Self {
        self.layer(BearerAuthLayer::new(token))
    }

    /// Add request/response logging via `tracing`.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add raw request/response dumps to standard output.
    #[must_use]
    pub fn with_dump(self) -> Self {
        self.layer(DumpLayer::new())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the client with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();
        let raw = RawHyperClient::new(config.clone());

        // Wrap inside-out so the first layer added is the outermost
        let mut service: BoxedService = BoxCloneService::new(raw);
        for layer_fn in self.layers.into_iter().rev() {
            service = layer_fn(service);
        }

        HyperClient::with_service(service, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_default() {
        let client = HyperClient::new();
        assert_eq!(client.config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn client_builder() {
        let client = HyperClient::builder()
            .timeout(Duration::from_secs(60))
            .pool_idle_per_host(16)
            .build();

        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert_eq!(client.config().pool_idle_per_host, 16);
    }

    #[test]
    fn client_builder_with_middleware() {
        let client = HyperClient::builder()
            .with_user_agent("courier-test")
            .with_basic_auth("user", "pass")
            .with_retry(3)
            .build();

        let _cloned = client.clone();
    }

    #[test]
    fn client_is_debug() {
        let client = HyperClient::new();
        let debug = format!("{client:?}");
        assert!(debug.contains("HyperClient"));
    }
}
