//! HTTP client trait.
//!
//! [`HttpClient`] is the seam between the option/encoder layer and the
//! transport: implementations own connections, TLS, and timeouts; callers
//! hand over a built [`Request`] and get a buffered [`Response`] back.

use std::future::Future;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations should be async-first and safe to share across tasks.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error for transport-level failures: connection errors,
    /// TLS errors, timeouts, or an invalid request. A received non-2xx
    /// response is *not* an error at this level; use
    /// [`Response::error_for_status`] for status classification.
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
