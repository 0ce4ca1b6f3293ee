//! Declarative request options.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tower::Layer;
use tower_service::Service;

use crate::client::{BoxedService, Plugin, plugin};
use crate::{Error, Method, Payload, Query, Request, Response};

/// A declarative description of one HTTP call.
///
/// Every field is optional; the per-method helpers fill in `url` and
/// `method`. Each call consumes its options, so concurrent callers are
/// independent.
///
/// # Example
///
/// ```ignore
/// use courier::{Options, Payload, Query};
///
/// let response = courier::get(
///     "https://api.example.com/search",
///     Options {
///         query: Some(Query::raw("q=rust&page=1")),
///         user_agent: Some("my-app/1.0".to_string()),
///         retry: true,
///         ..Options::default()
///     },
/// )
/// .await?;
/// ```
#[derive(Clone, Default)]
pub struct Options {
    /// Target URL. Set by the per-method helpers; required for [`crate::call`].
    pub url: String,
    /// HTTP method; defaults to GET when unset.
    pub method: Option<Method>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
    /// Request timeout; falls back to the client default when unset.
    pub timeout: Option<Duration>,
    /// Retry transient failures (3 attempts).
    pub retry: bool,
    /// Print raw request/response dumps for this call.
    pub debug: bool,
    /// Extension hooks applied ahead of the built-in middleware.
    pub plugins: Vec<Plugin>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Basic auth credentials `(username, password)`.
    pub basic_auth: Option<(String, String)>,
    /// Bearer token for `Authorization: Bearer`.
    pub bearer: Option<String>,
    /// Query parameters.
    pub query: Option<Query>,
    /// Request payload.
    pub payload: Option<Payload>,
    /// Explicit `Content-Type` override, applied after the payload's own.
    pub content_type: Option<String>,
}

impl Options {
    /// Append an extension hook built from a Tower [`Layer`].
    #[must_use]
    pub fn plugin<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.plugins.push(plugin(layer));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("debug", &self.debug)
            .field("plugins_count", &self.plugins.len())
            .field("user_agent", &self.user_agent)
            .field("basic_auth", &self.basic_auth.as_ref().map(|(user, _)| user))
            .field("bearer", &self.bearer.as_ref().map(|_| "<token>"))
            .field("query", &self.query)
            .field("payload", &self.payload)
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::UserAgentLayer;

    #[test]
    fn default_options_are_empty() {
        let options = Options::default();
        assert!(options.url.is_empty());
        assert!(options.method.is_none());
        assert!(options.headers.is_empty());
        assert!(!options.retry);
        assert!(!options.debug);
        assert!(options.plugins.is_empty());
        assert!(options.query.is_none());
        assert!(options.payload.is_none());
    }

    #[test]
    fn plugin_appends() {
        let options = Options::default()
            .plugin(UserAgentLayer::new("a"))
            .plugin(UserAgentLayer::new("b"));
        assert_eq!(options.plugins.len(), 2);
    }

    #[test]
    fn debug_hides_credentials() {
        let options = Options {
            basic_auth: Some(("alice".to_string(), "secret".to_string())),
            bearer: Some("token123".to_string()),
            ..Options::default()
        };

        let debug = format!("{options:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("token123"));
    }
}
