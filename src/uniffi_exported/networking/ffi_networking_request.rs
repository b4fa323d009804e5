use crate::prelude::*;

/// An abstraction of a HTTP Network Request to be made FFI Side (Swift side),
/// e.g. by URLSession in Swift.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFINetworkingRequest {
    pub url: String,
    pub method: HTTPMethod,
    pub headers: HashMap<String, String>,

    /// `None` for requests without a body, e.g. the feed fetches.
    pub body: Option<Vec<u8>>,

    pub cache_policy: CachePolicy,
    pub timeout_seconds: u64,
}

impl FFINetworkingRequest {
    /// A bodyless request with no header overrides, using the default timeout.
    pub fn new(method: HTTPMethod, url: impl Into<String>, cache_policy: CachePolicy) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            body: None,
            cache_policy,
            timeout_seconds: REQUEST_TIMEOUT_SECONDS,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}
