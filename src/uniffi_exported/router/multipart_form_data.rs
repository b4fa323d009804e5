use crate::prelude::*;

const CRLF: &[u8] = b"\r\n";

/// Builds a `multipart/form-data` body from a JSON part followed by a
/// binary file part, delimited by a caller chosen boundary.
///
/// The boundary is written as is, no part is scanned or escaped for it, so
/// a boundary occurring inside the JSON or the file bytes corrupts the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartFormData {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartFormData {
    pub fn new(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Value for the `Content-Type` header of a request carrying this body.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Appends the JSON stringified `parameters` as an unnamed part.
    pub fn append_json(mut self, parameters: &Value) -> Self {
        self.append_delimiter();
        self.append_line("Content-Disposition: form-data;");
        self.append_line(format!("Content-Type: {APPLICATION_JSON}"));
        self.body.extend_from_slice(CRLF);
        self.body.extend_from_slice(parameters.to_string().as_bytes());
        self.body.extend_from_slice(CRLF);
        self
    }

    /// Appends `data` as a file part named `field_name`.
    pub fn append_file(
        mut self,
        field_name: &str,
        file_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> Self {
        self.append_delimiter();
        self.append_line(format!(
            r#"Content-Disposition: form-data; name="{field_name}"; filename="{file_name}""#
        ));
        self.append_line(format!("Content-Type: {mime_type}"));
        self.body.extend_from_slice(CRLF);
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(CRLF);
        self
    }

    /// Writes the closing delimiter and returns the full body.
    pub fn finish(mut self) -> Vec<u8> {
        self.append_line(format!("--{}--", self.boundary));
        self.body
    }

    fn append_delimiter(&mut self) {
        self.append_line(format!("--{}", self.boundary));
    }

    fn append_line(&mut self, line: impl AsRef<str>) {
        self.body.extend_from_slice(line.as_ref().as_bytes());
        self.body.extend_from_slice(CRLF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn position(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn form() -> Vec<u8> {
        MultipartFormData::new("B")
            .append_json(&json!({ "title": "cat" }))
            .append_file("image", "cat.png", "image/png", &[0x89, 0x50, 0x4e, 0x47])
            .finish()
    }

    #[test]
    fn exact_layout() {
        let mut expected = Vec::new();
        expected.extend_from_slice(
            b"--B\r\n\
              Content-Disposition: form-data;\r\n\
              Content-Type: application/json\r\n\
              \r\n\
              {\"title\":\"cat\"}\r\n\
              --B\r\n\
              Content-Disposition: form-data; name=\"image\"; filename=\"cat.png\"\r\n\
              Content-Type: image/png\r\n\
              \r\n",
        );
        expected.extend_from_slice(&[0x89, 0x50, 0x4e, 0x47]);
        expected.extend_from_slice(b"\r\n--B--\r\n");
        assert_eq!(form(), expected);
    }

    #[test]
    fn two_delimiters_then_terminator() {
        let body = form();
        assert_eq!(occurrences(&body, b"--B\r\n"), 2);
        assert_eq!(occurrences(&body, b"--B--\r\n"), 1);
        assert!(body.ends_with(b"--B--\r\n"));
    }

    #[test]
    fn json_part_precedes_binary_part() {
        let body = form();
        let json_at = position(&body, b"{\"title\":\"cat\"}").unwrap();
        let binary_at = position(&body, &[0x89, 0x50, 0x4e, 0x47]).unwrap();
        assert!(json_at < binary_at);
    }

    #[test]
    fn content_type_carries_boundary() {
        assert_eq!(
            MultipartFormData::new("Boundary-42").content_type(),
            "multipart/form-data; boundary=Boundary-42"
        );
    }

    #[test]
    fn boundary_inside_payload_is_not_escaped() {
        let body = MultipartFormData::new("B")
            .append_json(&json!({}))
            .append_file("f", "f.bin", "application/octet-stream", b"--B\r\n")
            .finish();
        assert_eq!(occurrences(&body, b"--B\r\n"), 3);
    }
}
