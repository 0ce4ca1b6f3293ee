//! Request payload representations.
//!
//! [`Payload`] replaces an "anything plus a type enum" polymorphic pair with
//! a tagged union whose variant decides the wire serialization. Constructors
//! do the struct encoding up front, so a payload held in options is already
//! a concrete document.

use bytes::Bytes;
use derive_more::Display;
use serde::Serialize;

use crate::{Form, Params, QueryValues, Result, to_multipart_fields, to_query_values};

/// How a payload is serialized on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PayloadKind {
    /// Raw text body, sent verbatim.
    #[display("BODY")]
    Body,
    /// JSON document.
    #[display("JSON")]
    Json,
    /// XML document.
    #[display("XML")]
    Xml,
    /// URL-encoded form body.
    #[display("FORM")]
    Form,
    /// Multipart form data.
    #[display("DATA")]
    Data,
    /// Raw byte stream.
    #[display("STREAM")]
    Stream,
}

/// A request payload with its serialization already decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Raw text sent verbatim, no content type.
    Text(String),
    /// JSON document, encoded at call time.
    Json(serde_json::Value),
    /// Pre-serialized XML document.
    Xml(String),
    /// Pre-encoded URL form body.
    Form(String),
    /// Multipart form data.
    Multipart(Form),
    /// Raw bytes, no content type.
    Stream(Bytes),
}

impl Payload {
    /// Raw text payload.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// JSON payload from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// JSON payload from an already-built document.
    #[must_use]
    pub const fn json_value(value: serde_json::Value) -> Self {
        Self::Json(value)
    }

    /// XML payload from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if XML serialization fails.
    pub fn xml<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Xml(quick_xml::se::to_string(value)?))
    }

    /// XML payload from a pre-serialized document.
    pub fn xml_raw(document: impl Into<String>) -> Self {
        Self::Xml(document.into())
    }

    /// Form payload from a descriptor-backed struct, run through the query
    /// encoder.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeMismatch`] when a `squash` or `recursive`
    /// field holds a non-struct value.
    pub fn form<P: Params + ?Sized>(params: &P) -> Result<Self> {
        Ok(Self::Form(to_query_values(params)?.encode()))
    }

    /// Form payload from already-collected query values.
    #[must_use]
    pub fn form_values(values: &QueryValues) -> Self {
        Self::Form(values.encode())
    }

    /// Form payload from an already-encoded body, sent verbatim.
    pub fn form_raw(body: impl Into<String>) -> Self {
        Self::Form(body.into())
    }

    /// Multipart payload from a descriptor-backed struct.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeMismatch`] when a `squash` or `recursive`
    /// field holds a non-struct value.
    pub fn multipart<P: Params + ?Sized>(params: &P) -> Result<Self> {
        Ok(Self::Multipart(Form::from_fields(&to_multipart_fields(
            params,
        )?)))
    }

    /// Raw byte stream payload.
    pub fn stream(bytes: impl Into<Bytes>) -> Self {
        Self::Stream(bytes.into())
    }

    /// The payload's wire serialization kind.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Text(_) => PayloadKind::Body,
            Self::Json(_) => PayloadKind::Json,
            Self::Xml(_) => PayloadKind::Xml,
            Self::Form(_) => PayloadKind::Form,
            Self::Multipart(_) => PayloadKind::Data,
            Self::Stream(_) => PayloadKind::Stream,
        }
    }

    /// Encode into `(content type, body bytes)`.
    ///
    /// Raw text and stream payloads carry no content type of their own.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn into_body(self) -> Result<(Option<String>, Bytes)> {
        match self {
            Self::Text(body) => Ok((None, Bytes::from(body.into_bytes()))),
            Self::Json(value) => Ok((
                Some("application/json".to_string()),
                Bytes::from(serde_json::to_vec(&value)?),
            )),
            Self::Xml(document) => Ok((
                Some("application/xml".to_string()),
                Bytes::from(document.into_bytes()),
            )),
            Self::Form(body) => Ok((
                Some("application/x-www-form-urlencoded".to_string()),
                Bytes::from(body.into_bytes()),
            )),
            Self::Multipart(form) => {
                let (content_type, body) = form.into_body();
                Ok((Some(content_type), body))
            }
            Self::Stream(bytes) => Ok((None, bytes)),
        }
    }
}

impl From<&str> for Payload {
    fn from(body: &str) -> Self {
        Self::Text(body.to_string())
    }
}

impl From<String> for Payload {
    fn from(body: String) -> Self {
        Self::Text(body)
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::Stream(bytes)
    }
}

impl From<Form> for Payload {
    fn from(form: Form) -> Self {
        Self::Multipart(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, ToValue, Value};

    struct Account {
        user_id: u64,
        name: String,
    }

    impl Params for Account {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new("", "user_id", self.user_id.to_value()),
                Field::new("", "name", self.name.to_value()),
            ]
        }
    }

    impl ToValue for Account {
        fn to_value(&self) -> Value {
            Value::Struct(self.fields())
        }
    }

    fn account() -> Account {
        Account {
            user_id: 100,
            name: "value".to_string(),
        }
    }

    #[test]
    fn text_payload_verbatim() {
        let payload = Payload::text(r#"{"key": "value"}"#);
        assert_eq!(payload.kind(), PayloadKind::Body);

        let (content_type, body) = payload.into_body().expect("body");
        assert!(content_type.is_none());
        assert_eq!(body.as_ref(), br#"{"key": "value"}"#);
    }

    #[test]
    fn json_payload() {
        let payload =
            Payload::json_value(serde_json::json!({"key": "value", "user_id": "100"}));
        assert_eq!(payload.kind(), PayloadKind::Json);

        let (content_type, body) = payload.into_body().expect("body");
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let decoded: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            decoded,
            serde_json::json!({"key": "value", "user_id": "100"})
        );
    }

    #[test]
    fn form_payload_from_params() {
        let payload = Payload::form(&account()).expect("encode");
        assert_eq!(payload.kind(), PayloadKind::Form);

        let (content_type, body) = payload.into_body().expect("body");
        assert_eq!(
            content_type.as_deref(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(body.as_ref(), b"name=value&user_id=100");
    }

    #[test]
    fn form_payload_raw_verbatim() {
        let payload = Payload::form_raw("a=1&b=2");
        let (_, body) = payload.into_body().expect("body");
        assert_eq!(body.as_ref(), b"a=1&b=2");
    }

    #[test]
    fn multipart_payload_from_params() {
        let payload = Payload::multipart(&account()).expect("encode");
        assert_eq!(payload.kind(), PayloadKind::Data);

        let (content_type, body) = payload.into_body().expect("body");
        let content_type = content_type.expect("content type");
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let body_str = String::from_utf8_lossy(&body);
        assert!(body_str.contains("name=\"user_id\""));
        assert!(body_str.contains("100"));
    }

    #[test]
    fn stream_payload() {
        let payload = Payload::stream(vec![1_u8, 2, 3]);
        assert_eq!(payload.kind(), PayloadKind::Stream);

        let (content_type, body) = payload.into_body().expect("body");
        assert!(content_type.is_none());
        assert_eq!(body.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn xml_payload_serializes() {
        #[derive(serde::Serialize)]
        #[serde(rename = "user")]
        struct User {
            name: String,
        }

        let payload = Payload::xml(&User {
            name: "alice".to_string(),
        })
        .expect("serialize");
        assert_eq!(payload.kind(), PayloadKind::Xml);

        let (content_type, body) = payload.into_body().expect("body");
        assert_eq!(content_type.as_deref(), Some("application/xml"));
        assert_eq!(body.as_ref(), b"<user><name>alice</name></user>");
    }
}
