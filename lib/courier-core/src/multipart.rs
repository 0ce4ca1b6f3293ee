//! Multipart form data support.
//!
//! [`Form`] builds `multipart/form-data` bodies from text fields — including
//! the output of the multipart encoder sink — and file parts.

use bytes::{BufMut, Bytes, BytesMut};

use crate::MultipartFields;

/// A single part in a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Part {
    /// Create a text part (`text/plain; charset=utf-8`).
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            data: Bytes::from(value.into().into_bytes()),
        }
    }

    /// Create a binary part (`application/octet-stream`).
    #[must_use]
    pub fn bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: Some("application/octet-stream".to_string()),
            data: data.into(),
        }
    }

    /// Create a file part; the content type is guessed from the filename
    /// extension.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let filename = filename.into();
        let content_type = guess_content_type(&filename).to_string();
        Self {
            name: name.into(),
            filename: Some(filename),
            content_type: Some(content_type),
            data: data.into(),
        }
    }

    /// Override the content type for this part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filename, if set.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The part data.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    fn write_to(&self, buf: &mut BytesMut, boundary: &str) {
        buf.put_slice(b"--");
        buf.put_slice(boundary.as_bytes());
        buf.put_slice(b"\r\n");

        buf.put_slice(b"Content-Disposition: form-data; name=\"");
        buf.put_slice(self.name.as_bytes());
        buf.put_slice(b"\"");
        if let Some(filename) = &self.filename {
            buf.put_slice(b"; filename=\"");
            buf.put_slice(filename.as_bytes());
            buf.put_slice(b"\"");
        }
        buf.put_slice(b"\r\n");

        if let Some(content_type) = &self.content_type {
            buf.put_slice(b"Content-Type: ");
            buf.put_slice(content_type.as_bytes());
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"\r\n");
        buf.put_slice(&self.data);
        buf.put_slice(b"\r\n");
    }
}

fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "csv" => "text/csv",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        _ => "application/octet-stream",
    }
}

/// A multipart form containing multiple parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    parts: Vec<Part>,
    boundary: String,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create an empty form with a generated boundary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            boundary: generate_boundary(),
        }
    }

    /// Create an empty form with a caller-chosen boundary.
    ///
    /// The boundary must not appear in any part data.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            boundary: boundary.into(),
        }
    }

    /// Build a form of text parts from encoded multipart fields, in key
    /// order.
    #[must_use]
    pub fn from_fields(fields: &MultipartFields) -> Self {
        let mut form = Self::new();
        for (name, values) in fields.iter() {
            for value in values {
                form.parts.push(Part::text(name, value.clone()));
            }
        }
        form
    }

    /// Add a part to the form.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a text field to the form.
    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    /// Add a file to the form.
    #[must_use]
    pub fn file(
        self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.part(Part::file(name, filename, data))
    }

    /// The boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The parts in this form.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The `Content-Type` header value for this form.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Convert the form into `(content type, body bytes)`.
    #[must_use]
    pub fn into_body(self) -> (String, Bytes) {
        let content_type = self.content_type();

        let mut buf = BytesMut::new();
        for part in &self.parts {
            part.write_to(&mut buf, &self.boundary);
        }
        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        (content_type, buf.freeze())
    }
}

fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----CourierBoundary{timestamp:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sink, Value};

    #[test]
    fn part_text() {
        let part = Part::text("field", "value");
        assert_eq!(part.name(), "field");
        assert_eq!(part.data().as_ref(), b"value");
        assert_eq!(part.content_type(), Some("text/plain; charset=utf-8"));
        assert!(part.filename().is_none());
    }

    #[test]
    fn part_file() {
        let part = Part::file("upload", "photo.jpg", vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(part.filename(), Some("photo.jpg"));
        assert_eq!(part.content_type(), Some("image/jpeg"));
    }

    #[test]
    fn part_content_type_override() {
        let part = Part::bytes("field", "data").with_content_type("application/custom");
        assert_eq!(part.content_type(), Some("application/custom"));
    }

    #[test]
    fn form_content_type() {
        let form = Form::with_boundary("test-boundary");
        assert_eq!(
            form.content_type(),
            "multipart/form-data; boundary=test-boundary"
        );
    }

    #[test]
    fn form_encode() {
        let form = Form::with_boundary("boundary123").text("field", "value");

        let (content_type, body) = form.into_body();
        assert_eq!(content_type, "multipart/form-data; boundary=boundary123");

        let body_str = String::from_utf8_lossy(&body);
        assert!(body_str.contains("--boundary123\r\n"));
        assert!(body_str.contains("Content-Disposition: form-data; name=\"field\"\r\n"));
        assert!(body_str.contains("value\r\n"));
        assert!(body_str.contains("--boundary123--\r\n"));
    }

    #[test]
    fn form_encode_with_file() {
        let form = Form::with_boundary("boundary456").file("upload", "notes.txt", "file content");

        let (_, body) = form.into_body();
        let body_str = String::from_utf8_lossy(&body);
        assert!(body_str.contains("name=\"upload\"; filename=\"notes.txt\""));
        assert!(body_str.contains("Content-Type: text/plain\r\n"));
        assert!(body_str.contains("file content\r\n"));
    }

    #[test]
    fn form_from_fields() {
        let mut fields = MultipartFields::new();
        fields.emit("key", &Value::Str("value".to_string()));
        fields.emit("user_id", &Value::Uint(100));

        let form = Form::from_fields(&fields);
        assert_eq!(form.parts().len(), 2);
        assert_eq!(form.parts().first().map(Part::name), Some("key"));
        assert_eq!(form.parts().get(1).map(Part::name), Some("user_id"));
    }

    #[test]
    fn generated_boundary_prefix() {
        let form = Form::new();
        assert!(form.boundary().starts_with("----CourierBoundary"));
    }

    #[test]
    fn guess_content_type_common() {
        assert_eq!(guess_content_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("data.json"), "application/json");
        assert_eq!(guess_content_type("unknown.xyz"), "application/octet-stream");
    }
}
