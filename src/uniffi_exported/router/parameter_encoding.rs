use crate::prelude::*;
use url::{form_urlencoded, Url};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";
pub const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// How request parameters are put onto a [`FFINetworkingRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterEncoding {
    /// Query string for GET, form body for anything else.
    Url,
    /// JSON body with `Content-Type: application/json`.
    Json,
}

impl ParameterEncoding {
    /// Returns `request` with `parameters` encoded onto it. `None` leaves the
    /// request untouched.
    pub fn encode(
        &self,
        request: FFINetworkingRequest,
        parameters: Option<&Value>,
    ) -> FFINetworkingRequest {
        let Some(parameters) = parameters else {
            return request;
        };
        match self {
            Self::Json => request
                .with_header(CONTENT_TYPE, APPLICATION_JSON)
                .with_body(parameters.to_string().into_bytes()),
            Self::Url => {
                let pairs = url_encoded_pairs(parameters);
                if pairs.is_empty() {
                    return request;
                }
                match request.method {
                    HTTPMethod::Get => with_query_pairs(request, &pairs),
                    HTTPMethod::Post => {
                        let body = form_urlencoded::Serializer::new(String::new())
                            .extend_pairs(&pairs)
                            .finish();
                        request
                            .with_header(CONTENT_TYPE, FORM_URL_ENCODED)
                            .with_body(body.into_bytes())
                    }
                }
            }
        }
    }
}

/// Appends `pairs` to the query of the request URL, keeping any fragment
/// after it. An unparsable URL is left as is.
fn with_query_pairs(
    request: FFINetworkingRequest,
    pairs: &[(String, String)],
) -> FFINetworkingRequest {
    let mut url = match Url::parse(&request.url) {
        Ok(url) => url,
        Err(error) => {
            warn!(%error, url = %request.url, "Not URL encoding parameters.");
            return request;
        }
    };
    url.query_pairs_mut().extend_pairs(pairs);
    FFINetworkingRequest {
        url: url.into(),
        ..request
    }
}

/// Top level object entries as `key=value` pairs, strings verbatim and any
/// other value as its JSON text. Non-object parameters encode to nothing.
fn url_encoded_pairs(parameters: &Value) -> Vec<(String, String)> {
    let Some(object) = parameters.as_object() else {
        return Vec::new();
    };
    object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(string) => string.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}
