//! Prelude module for convenient imports.
//!
//! ```
//! use courier_core::prelude::*;
//! ```

pub use crate::{
    Error, Field, FieldTag, Form, HttpClient, Method, MultipartFields, Params, Part, Payload,
    PayloadKind, Query, QueryValues, Request, RequestBuilder, Response, Result, Sink, StatusCode,
    TagFlags, ToValue, Value, from_json, from_xml, to_json, to_multipart_fields, to_query_values,
    to_xml, walk,
};
