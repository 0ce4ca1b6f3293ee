//! Core types for the courier declarative HTTP client.
//!
//! This crate provides the foundational types used by courier:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type with status-based error classification
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Core client trait for HTTP execution
//! - [`Query`] - Query parameter representations
//! - [`Payload`] and [`PayloadKind`] - Request body representations
//! - The encoder subsystem: [`FieldTag`], [`Value`], [`Params`], [`Sink`],
//!   [`walk`], [`QueryValues`], [`MultipartFields`]
//! - [`Form`] and [`Part`] - Multipart form data
//! - [`StatusCode`] - HTTP status codes (re-exported from `http`)

mod body;
mod client;
mod encode;
mod error;
mod method;
mod multipart;
mod payload;
pub mod prelude;
mod query;
mod request;
mod response;
mod tag;
mod value;
mod walk;

pub use body::{from_json, from_xml, to_json, to_xml};
pub use client::HttpClient;
pub use encode::{MultipartFields, QueryValues, to_multipart_fields, to_query_values};
pub use error::{Error, Result};
pub use method::Method;
pub use multipart::{Form, Part};
pub use payload::{Payload, PayloadKind};
pub use query::Query;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use tag::{FieldTag, TagFlags};
pub use value::{Field, ToValue, Value};
pub use walk::{Params, Sink, walk};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
