//! User-Agent middleware.
//!
//! Adds a `User-Agent` header to all outgoing requests, replacing any value
//! set earlier in the stack.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Layer that sets the `User-Agent` header on requests.
#[derive(Debug, Clone)]
pub struct UserAgentLayer {
    user_agent: Arc<str>,
}

impl UserAgentLayer {
    /// Create a new layer with the given user agent string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Arc::from(user_agent.into()),
        }
    }
}

impl<S> Layer<S> for UserAgentLayer {
    type Service = UserAgent<S>;

    fn layer(&self, inner: S) -> Self::Service {
        UserAgent {
            inner,
            user_agent: Arc::clone(&self.user_agent),
        }
    }
}

/// Service that sets the `User-Agent` header on requests.
#[derive(Debug, Clone)]
pub struct UserAgent<S> {
    inner: S,
    user_agent: Arc<str>,
}

impl<S> Service<Request> for UserAgent<S>
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

    fn call(&mut self, mut request: Request) -> Self::Future {
        request
            .headers_mut()
            .insert("User-Agent".to_string(), self.user_agent.to_string());

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_layer_clone() {
        let layer = UserAgentLayer::new("courier/0.1");
        let cloned = layer.clone();
        assert_eq!(&*cloned.user_agent, "courier/0.1");
    }
}
