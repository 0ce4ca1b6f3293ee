//! HTTP response handling.
//!
//! [`Response`] wraps the transport's status, headers, and buffered body,
//! adding decode helpers and status-based error classification:
//!
//! ```
//! use std::collections::HashMap;
//! use bytes::Bytes;
//! use courier_core::Response;
//!
//! let response = Response::new(404, HashMap::new(), Bytes::from("missing"));
//! assert!(response.error_for_status().is_err());
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Error, Result};

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the body bytes.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 3xx.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Returns an error when the status is not a 2xx success code.
    ///
    /// The error carries the numeric status and the raw body text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for any non-2xx response.
    pub fn error_for_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Status {
                status: self.status,
                body: self.text(),
            })
        }
    }

    /// Response body as text (lossy UTF-8).
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// Deserialize the response body as XML.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn xml<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_xml(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.is_success());
        assert!(!response.is_client_error());
    }

    #[test]
    fn status_classification() {
        assert!(Response::new(301, HashMap::new(), Bytes::new()).is_redirection());
        assert!(Response::new(404, HashMap::new(), Bytes::new()).is_client_error());
        assert!(Response::new(500, HashMap::new(), Bytes::new()).is_server_error());
    }

    #[test]
    fn error_for_status_passes_2xx() {
        for status in [200, 201, 204, 299] {
            let response = Response::new(status, HashMap::new(), Bytes::new());
            assert!(response.error_for_status().is_ok(), "status {status}");
        }
    }

    #[test]
    fn error_for_status_carries_code_and_body() {
        let response = Response::new(404, HashMap::new(), Bytes::from("Not Found"));
        let err = response.error_for_status().expect_err("should fail");

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("Not Found"));
        assert_eq!(err.to_string(), "status error 404: Not Found");
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            id: u64,
            name: String,
        }

        let response = Response::new(
            200,
            HashMap::new(),
            Bytes::from(r#"{"id":1,"name":"test"}"#),
        );

        let user: User = response.json().expect("deserialize");
        assert_eq!(
            user,
            User {
                id: 1,
                name: "test".to_string()
            }
        );
    }

    #[test]
    fn response_xml() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
        }

        let response = Response::new(
            200,
            HashMap::new(),
            Bytes::from("<user><name>test</name></user>"),
        );

        let user: User = response.xml().expect("deserialize");
        assert_eq!(
            user,
            User {
                name: "test".to_string()
            }
        );
    }

    #[test]
    fn response_text() {
        let response = Response::new(200, HashMap::new(), Bytes::from("Hello, World!"));
        assert_eq!(response.text(), "Hello, World!");
    }
}
