//! Declarative request options for HTTP calls over hyper.
//!
//! Describe a call with an [`Options`] value and send it; headers, auth,
//! query parameters, body encoding, retry, timeout, and debug dumps are
//! configured from the options. Structs encode into query strings, form
//! bodies, and multipart fields through `#[derive(Params)]`.
//!
//! # Example
//!
//! ```ignore
//! use courier::{Options, Params, Payload};
//!
//! #[derive(Params)]
//! struct Login {
//!     #[param(rename = "user_id")]
//!     uid: u64,
//!     #[param(omitempty)]
//!     nickname: String,
//! }
//!
//! let response = courier::post(
//!     "https://api.example.com/login",
//!     Options {
//!         payload: Some(Payload::form(&Login { uid: 100, nickname: String::new() })?),
//!         retry: true,
//!         ..Options::default()
//!     },
//! )
//! .await?;
//! response.error_for_status()?;
//! ```

mod call;
mod client;
mod config;
mod debug;
pub mod middleware;
mod options;
pub mod prelude;

// Call surface
pub use call::{call, call_with_result, delete, get, post, put};

// Client types
pub use client::{BoxedService, HyperClient, HyperClientBuilder, Plugin, ServiceFuture, plugin};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use debug::{debug_enabled, debug_off, debug_on};
pub use options::Options;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use courier_core::{
    Error, Field, FieldTag, Form, HttpClient, Method, MultipartFields, Params, Part, Payload,
    PayloadKind, Query, QueryValues, Request, RequestBuilder, Response, Result, Sink, TagFlags,
    ToValue, Value, from_json, from_xml, to_json, to_multipart_fields, to_query_values, to_xml,
    walk,
};

// Re-export http types for status codes and headers
pub use courier_core::{StatusCode, header};

// Re-export crates callers commonly pair with the options surface
pub use serde_json;
pub use url;

// Re-export macros
pub use courier_macro::Params;
