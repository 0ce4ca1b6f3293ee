//! Retry middleware for HTTP requests.
//!
//! A simple policy for `tower::retry::RetryLayer`, customized on response
//! status codes and error types.

use std::future;

use tower::retry::Policy;

use crate::{Error, Request, Response};

/// A simple retry policy for HTTP requests.
///
/// By default, retries:
/// - Connection errors and timeouts
/// - 5xx server errors
/// - 429 Too Many Requests
///
/// # Example
///
/// ```ignore
/// use courier::middleware::{RetryLayer, RetryPolicy};
///
/// let client = courier::HyperClient::builder()
///     .layer(RetryLayer::new(RetryPolicy::new(3)))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    remaining: u32,
}

impl RetryPolicy {
    /// Create a new retry policy with the given maximum number of retries.
    #[must_use]
    pub fn new(max_retries: u32) -> Self {
        Self {
            remaining: max_retries,
        }
    }

    /// Returns `true` if the response should be retried.
    fn should_retry_response(response: &Response) -> bool {
        let status = response.status();
        status >= 500 || status == 429
    }

    /// Returns `true` if the error should be retried.
    fn should_retry_error(error: &Error) -> bool {
        error.is_connection() || error.is_timeout()
    }
}

impl Policy<Request, Response, Error> for RetryPolicy {
    type Future = future::Ready<()>;

    fn retry(
        &mut self,
        _req: &mut Request,
        result: &mut Result<Response, Error>,
    ) -> Option<Self::Future> {
        if self.remaining == 0 {
            return None;
        }

        let should_retry = match result {
            Ok(response) => Self::should_retry_response(response),
            Err(error) => Self::should_retry_error(error),
        };

        if should_retry {
            self.remaining -= 1;
            Some(future::ready(()))
        } else {
            None
        }
    }

    fn clone_request(&mut self, req: &Request) -> Option<Request> {
        Some(req.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;

    use super::*;

    #[test]
    fn retry_policy_new() {
        let policy = RetryPolicy::new(3);
        assert_eq!(policy.remaining, 3);
    }

    #[test]
    fn should_retry_5xx_response() {
        let response = Response::new(500, HashMap::default(), Bytes::new());
        assert!(RetryPolicy::should_retry_response(&response));

        let response = Response::new(503, HashMap::default(), Bytes::new());
        assert!(RetryPolicy::should_retry_response(&response));
    }

    #[test]
    fn should_retry_429_response() {
        let response = Response::new(429, HashMap::default(), Bytes::new());
        assert!(RetryPolicy::should_retry_response(&response));
    }

    #[test]
    fn should_not_retry_4xx_response() {
        let response = Response::new(404, HashMap::default(), Bytes::new());
        assert!(!RetryPolicy::should_retry_response(&response));
    }

    #[test]
    fn should_not_retry_2xx_response() {
        let response = Response::new(200, HashMap::default(), Bytes::new());
        assert!(!RetryPolicy::should_retry_response(&response));
    }

    #[test]
    fn should_retry_transport_errors() {
        assert!(RetryPolicy::should_retry_error(&Error::connection(
            "connection refused"
        )));
        assert!(RetryPolicy::should_retry_error(&Error::Timeout));
        assert!(!RetryPolicy::should_retry_error(&Error::invalid_request(
            "bad"
        )));
    }
}
