//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use courier_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failure names the exact field that did
/// not deserialize (e.g., "user.address.city").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Serialize a value to an XML document string.
///
/// # Errors
///
/// Returns an error if XML serialization fails.
pub fn to_xml<T: serde::Serialize>(value: &T) -> Result<String> {
    quick_xml::se::to_string(value).map_err(Into::into)
}

/// Deserialize XML bytes to a value.
///
/// # Errors
///
/// Returns an error if XML deserialization fails.
pub fn from_xml<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    quick_xml::de::from_reader(bytes).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename = "user")]
    struct User {
        name: String,
        age: u32,
    }

    #[test]
    fn json_round_trip() {
        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let bytes = to_json(&user).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);

        let decoded: User = from_json(&bytes).expect("deserialize");
        assert_eq!(decoded, user);
    }

    #[test]
    fn from_json_syntax_error() {
        let result: Result<User> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Profile {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<Profile> = from_json(br#"{"address":{}}"#);
        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }

    #[test]
    fn xml_round_trip() {
        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let document = to_xml(&user).expect("serialize");
        assert_eq!(document, "<user><name>Alice</name><age>30</age></user>");

        let decoded: User = from_xml(document.as_bytes()).expect("deserialize");
        assert_eq!(decoded, user);
    }

    #[test]
    fn from_xml_malformed() {
        let result: Result<User> = from_xml(b"<user><name>");
        assert!(result.is_err());
    }
}
