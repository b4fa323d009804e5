use crate::prelude::*;

/// Every call the app makes, prior to HTTP encoding.
#[derive(Clone, Debug, PartialEq, EnumAsInner)]
pub enum Router {
    FetchTopFree,
    FetchTopPaid,
    CreatePost { params: Value },
    CreateMultipart { content_type: String, payload: Vec<u8> },
}

impl Router {
    pub fn create_multipart(form: MultipartFormData) -> Self {
        Self::CreateMultipart {
            content_type: form.content_type(),
            payload: form.finish(),
        }
    }

    pub fn method(&self) -> HTTPMethod {
        match self {
            Self::CreatePost { .. } | Self::CreateMultipart { .. } => HTTPMethod::Post,
            Self::FetchTopFree | Self::FetchTopPaid => HTTPMethod::Get,
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::FetchTopFree => TOP_FREE_URL,
            Self::FetchTopPaid => TOP_PAID_URL,
            Self::CreatePost { .. } | Self::CreateMultipart { .. } => HTTPBIN_POST_URL,
        }
    }

    /// The fully resolved request for this call. Pure: equal calls give
    /// equal requests.
    pub fn request(&self) -> FFINetworkingRequest {
        let request = FFINetworkingRequest::new(
            self.method(),
            self.url(),
            CachePolicy::ReloadIgnoringLocalCacheData,
        );
        match self {
            Self::CreatePost { params } => ParameterEncoding::Json.encode(request, Some(params)),
            Self::CreateMultipart {
                content_type,
                payload,
            } => request
                .with_header(CONTENT_TYPE, content_type.clone())
                .with_body(payload.clone()),
            Self::FetchTopFree | Self::FetchTopPaid => ParameterEncoding::Url.encode(request, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fetches_are_plain_gets() {
        for (call, url) in [
            (Router::FetchTopFree, TOP_FREE_URL),
            (Router::FetchTopPaid, TOP_PAID_URL),
        ] {
            let request = call.request();
            assert_eq!(request.method, HTTPMethod::Get);
            assert_eq!(request.url, url);
            assert_eq!(request.body, None);
            assert!(request.headers.is_empty());
            assert_eq!(request.cache_policy, CachePolicy::ReloadIgnoringLocalCacheData);
            assert_eq!(request.timeout_seconds, 60);
        }
    }

    #[test]
    fn create_post_body_round_trips() {
        let params = json!({
            "name": "demo",
            "tags": ["a", "b"],
            "nested": { "n": 1.5, "ok": true }
        });
        let request = Router::CreatePost { params: params.clone() }.request();
        assert_eq!(request.method, HTTPMethod::Post);
        assert_eq!(request.url, HTTPBIN_POST_URL);
        assert_eq!(request.headers.get(CONTENT_TYPE).map(String::as_str), Some(APPLICATION_JSON));
        let body = request.body.expect("JSON body");
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), params);
    }

    #[test]
    fn create_multipart_passes_payload_verbatim() {
        let call = Router::CreateMultipart {
            content_type: "multipart/form-data; boundary=xyz".to_owned(),
            payload: vec![0, 1, 2, 255],
        };
        let request = call.request();
        assert_eq!(request.method, HTTPMethod::Post);
        assert_eq!(request.url, HTTPBIN_POST_URL);
        assert_eq!(request.body, Some(vec![0, 1, 2, 255]));
        assert_eq!(
            request.headers.get(CONTENT_TYPE).map(String::as_str),
            Some("multipart/form-data; boundary=xyz")
        );
        assert_eq!(request.timeout_seconds, REQUEST_TIMEOUT_SECONDS);
    }

    #[test]
    fn create_multipart_from_form() {
        let form = MultipartFormData::new("B").append_json(&json!({}));
        let call = Router::create_multipart(form.clone());
        let (content_type, payload) = call.into_create_multipart().unwrap();
        assert_eq!(content_type, form.content_type());
        assert_eq!(payload, form.finish());
    }

    #[test]
    fn mapping_is_deterministic() {
        let call = Router::CreatePost { params: json!({ "k": "v" }) };
        assert_eq!(call.request(), call.clone().request());
        assert!(call.as_create_post().is_some());
        assert!(Router::FetchTopFree.is_fetch_top_free());
    }
}
