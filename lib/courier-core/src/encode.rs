//! Encoder sinks built on the struct walker.
//!
//! Two sinks cover the wire formats the call surface needs:
//! [`QueryValues`] for query strings and URL-encoded form bodies, and
//! [`MultipartFields`] for multipart form data.

use std::collections::BTreeMap;
use std::fmt;

use crate::{Params, Result, Sink, Value, walk};

/// Ordered key/value collector for query strings and form bodies.
///
/// Keys may repeat: emitting the same key twice appends rather than
/// overwrites. [`QueryValues::encode`] sorts by key (stably, so repeated
/// values keep their order) to produce reproducible wire strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    pairs: Vec<(String, String)>,
}

impl QueryValues {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// The collected pairs, in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns `true` when no pair has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of collected pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// URL-encode the pairs, sorted by key for a reproducible wire string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut sorted = self.pairs.clone();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &sorted {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Parse an encoded query string back into pairs.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let pairs = url::form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }
}

impl fmt::Display for QueryValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { pairs }
    }
}

impl Sink for QueryValues {
    fn emit(&mut self, key: &str, value: &Value) {
        self.add(key, value.to_string());
    }

    fn emit_nested(&mut self, key: &str, nested: Self) {
        self.add(key, nested.encode());
    }
}

/// Field-name → values mapping for multipart bodies.
///
/// Each emit stores a single-element list; the list shape leaves room for
/// multi-value fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartFields {
    fields: BTreeMap<String, Vec<String>>,
}

impl MultipartFields {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Iterate the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns `true` when no field has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.fields {
            for value in values {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}

impl Sink for MultipartFields {
    fn emit(&mut self, key: &str, value: &Value) {
        self.fields.insert(key.to_string(), vec![value.to_string()]);
    }

    fn emit_nested(&mut self, key: &str, nested: Self) {
        self.fields.insert(key.to_string(), vec![nested.encode()]);
    }
}

/// Encode a descriptor-backed struct as URL query values.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] when a `squash` or `recursive`
/// field holds a non-struct value.
pub fn to_query_values<P: Params + ?Sized>(params: &P) -> Result<QueryValues> {
    let mut values = QueryValues::new();
    walk(params, &mut values)?;
    Ok(values)
}

/// Encode a descriptor-backed struct as multipart field data.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] when a `squash` or `recursive`
/// field holds a non-struct value.
pub fn to_multipart_fields<P: Params + ?Sized>(params: &P) -> Result<MultipartFields> {
    let mut fields = MultipartFields::new();
    walk(params, &mut fields)?;
    Ok(fields)
}
