//! Prelude module for convenient imports.
//!
//! ```ignore
//! use courier::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Error, Form, HttpClient, HyperClient, Method, Options, Params, Part, Payload,
    PayloadKind, Query, Request, RequestBuilder, Response, Result, StatusCode, ToValue, Value,
    call, call_with_result, debug_off, debug_on, delete, from_json, get, header, post, put,
    to_json, to_query_values,
};
pub use serde::{Deserialize, Serialize};
