use crate::prelude::*;

/// An abstraction of a HTTP Network Response the FFI Side (Swift side),
/// completed a [`FFINetworkingRequest`] with
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFINetworkingResponse {
    pub status_code: u16,

    pub headers: HashMap<String, String>,

    /// Can be empty.
    pub body: Vec<u8>,
}

impl FFINetworkingResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// Case-insensitive header lookup, since the FFI side does not normalize
    /// header names.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        self.header("Content-Length")
            .and_then(|value| value.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status_code: u16, headers: &[(&str, &str)]) -> FFINetworkingResponse {
        FFINetworkingResponse {
            status_code,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: Vec::new(),
        }
    }

    #[test]
    fn success_is_2xx_only() {
        assert!(response(200, &[]).is_success());
        assert!(response(299, &[]).is_success());
        assert!(!response(304, &[]).is_success());
        assert!(!response(404, &[]).is_success());
    }

    #[test]
    fn content_length_header_is_case_insensitive() {
        assert_eq!(response(200, &[("content-length", " 12")]).content_length(), Some(12));
        assert_eq!(response(200, &[("Content-Length", "abc")]).content_length(), None);
        assert_eq!(response(200, &[]).content_length(), None);
    }
}
