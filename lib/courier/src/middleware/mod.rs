//! Tower middleware layers for the courier HTTP client.
//!
//! Layers compose over the boxed client service; [`crate::HyperClient`]'s
//! builder applies them in the order added, so the first layer added is the
//! first to see each outgoing request — mirroring how the call surface
//! registers plugins, user-agent, auth, retry, and dumps in a fixed order.
//!
//! # Available Layers
//!
//! - [`UserAgentLayer`] - Adds a `User-Agent` header
//! - [`BasicAuthLayer`] - Adds `Authorization: Basic <base64>` header
//! - [`BearerAuthLayer`] - Adds `Authorization: Bearer <token>` header
//! - [`RetryPolicy`] - Configurable retry policy for [`RetryLayer`]
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//! - [`DumpLayer`] - Prints raw request/response dumps to stdout
//!
//! # Example
//!
//! ```ignore
//! use courier::HyperClient;
//! use courier::middleware::BearerAuthLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(BearerAuthLayer::new("my-token"))
//!     .with_retry(3)
//!     .build();
//! ```

mod basic_auth;
mod bearer_auth;
mod dump;
mod logging;
mod retry;
mod user_agent;

pub use basic_auth::{BasicAuth, BasicAuthLayer};
pub use bearer_auth::{BearerAuth, BearerAuthLayer};
pub use dump::{Dump, DumpLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};
pub use retry::RetryPolicy;
pub use user_agent::{UserAgent, UserAgentLayer};

// Re-export tower types for convenience
pub use tower::retry::RetryLayer;
pub use tower::{Layer, ServiceBuilder};
