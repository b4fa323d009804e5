use crate::prelude::*;

/// Client for the iTunes top charts and the httpbin echo endpoint, making its
/// network requests using a "network antenna" 'installed' from FFI Side
/// (Swift side).
///
/// Successful chart fetches replace [`RouterService::current_items`]. No
/// ordering is imposed between concurrent fetches: whichever completes last
/// wins, superseded responses are not discarded.
#[derive(Object)]
pub struct RouterService {
    networking_dispatcher: FFIOperationDispatcher<FFINetworkingOutcomeListener>,
    current_items: Mutex<Vec<AppItem>>,
    image_cache: Arc<ImageResponseCache>,
}

#[export]
impl RouterService {
    /// Constructs a new [`RouterService`] using a "network antenna" - a type
    /// implementing [`FFINetworkingExecutor`] on the FFI side (Swift side),
    /// e.g. `[Swift]URLSession` which wraps the execution of a network call.
    #[uniffi::constructor]
    pub fn new(network_antenna: Arc<dyn FFINetworkingExecutor>) -> Self {
        Self {
            networking_dispatcher: FFIOperationDispatcher::new(network_antenna),
            current_items: Mutex::new(Vec::new()),
            image_cache: Arc::new(ImageResponseCache::new()),
        }
    }

    pub async fn fetch_top_free(&self) -> FetchOutcome {
        self.fetch_app_items(Router::FetchTopFree).await
    }

    pub async fn fetch_top_paid(&self) -> FetchOutcome {
        self.fetch_app_items(Router::FetchTopPaid).await
    }

    /// Author of the top free chart, e.g. "iTunes Store".
    pub async fn fetch_top_free_author_name(&self) -> Option<String> {
        match self.fetch_json(Router::FetchTopFree).await {
            Ok(json) => parse_feed_author_name(&json),
            Err(error) => {
                warn!(%error, "Failed to fetch feed author.");
                None
            }
        }
    }

    /// POSTs `params_json` as a JSON body, returns whether the request
    /// succeeded. Invalid JSON is never sent.
    pub async fn create_post(&self, params_json: String) -> bool {
        match parse_json_parameters(&params_json) {
            Ok(params) => self.post_json(params).await,
            Err(error) => {
                warn!(%error, "Not posting.");
                false
            }
        }
    }

    /// POSTs a multipart body made from `upload`, returns whether the
    /// request succeeded.
    pub async fn create_multipart(&self, upload: MultipartUpload) -> bool {
        match upload.form_data() {
            Ok(form) => self.send_and_log(Router::create_multipart(form)).await,
            Err(error) => {
                warn!(%error, "Not uploading.");
                false
            }
        }
    }

    /// Downloads the image at `url`, storing it in [`RouterService::image_cache`]
    /// when the body is complete. `None` on any failure.
    pub async fn fetch_image(&self, url: String) -> Option<Vec<u8>> {
        match self.download_image(&url).await {
            Ok(body) => Some(body),
            Err(error) => {
                warn!(%error, %url, "Failed to fetch image.");
                None
            }
        }
    }

    /// Snapshot of the items from the most recently completed successful fetch.
    pub fn current_items(&self) -> Vec<AppItem> {
        self.current_items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    pub fn image_cache(&self) -> Arc<ImageResponseCache> {
        self.image_cache.clone()
    }
}

impl RouterService {
    /// POSTs any serializable `params` as a JSON body, returns whether the
    /// request succeeded.
    pub async fn create_post_with<T: Serialize>(&self, params: &T) -> bool {
        match serde_json::to_value(params) {
            Ok(params) => self.post_json(params).await,
            Err(error) => {
                warn!(%error, "Unable to JSON serialize post parameters.");
                false
            }
        }
    }

    async fn post_json(&self, params: Value) -> bool {
        self.send_and_log(Router::CreatePost { params }).await
    }

    async fn fetch_app_items(&self, call: Router) -> FetchOutcome {
        let url = call.url();
        match self.fetch_json(call).await {
            Ok(json) => {
                let items = parse_app_items(&json);
                info!(url, count = items.len(), "Fetched app items.");
                self.replace_current_items(items.clone());
                FetchOutcome::success(items)
            }
            Err(error) => {
                warn!(%error, url, "Failed to fetch app items.");
                FetchOutcome::failure()
            }
        }
    }

    fn replace_current_items(&self, items: Vec<AppItem>) {
        if let Ok(mut current) = self.current_items.lock() {
            *current = items;
        }
    }

    /// Sends `call` and logs the echoed response, the body is not mapped.
    async fn send_and_log(&self, call: Router) -> bool {
        match self.execute(call.request()).await {
            Ok(response) => {
                debug!(
                    body = %String::from_utf8_lossy(&response.body),
                    "Response from {}", call.url()
                );
                true
            }
            Err(error) => {
                warn!(%error, url = call.url(), "Request failed.");
                false
            }
        }
    }

    async fn fetch_json(&self, call: Router) -> Result<Value, FFIBridgeError> {
        let response = self.execute(call.request()).await?;
        json_from_response(response).map_err(FFIBridgeError::from)
    }

    /// Requests the normalized URL, but caches under `raw_url` as given since
    /// that is what the host looks entries up with.
    async fn download_image(&self, raw_url: &str) -> Result<Vec<u8>, FFIBridgeError> {
        let url = url::Url::parse(raw_url).map_err(|_| RustSideError::InvalidURL {
            string: raw_url.to_owned(),
        })?;
        let request = FFINetworkingRequest::new(
            HTTPMethod::Get,
            url.as_str(),
            CachePolicy::UseProtocolCachePolicy,
        );
        let response = self.execute(request).await?;
        self.image_cache
            .store_if_complete(raw_url, &response.body, response.content_length());
        Ok(response.body)
    }

    /// Lets Swift side make the request and awaits the response, anything
    /// but a 2xx status is an error.
    async fn execute(
        &self,
        request: FFINetworkingRequest,
    ) -> Result<FFINetworkingResponse, FFIBridgeError> {
        debug!(method = %request.method, url = %request.url, "Dispatching request.");
        let response = self.networking_dispatcher.dispatch(request).await?;
        if !response.is_success() {
            return Err(RustSideError::BadResponseCode {
                status_code: response.status_code,
            }
            .into());
        }
        Ok(response)
    }
}

fn json_from_response(response: FFINetworkingResponse) -> Result<Value, RustSideError> {
    if response.body.is_empty() {
        return Err(RustSideError::ResponseBodyWasNil);
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        RustSideError::UnableToJSONDeserializeHTTPResponseBody {
            underlying: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &[u8]) -> FFINetworkingResponse {
        FFINetworkingResponse {
            status_code: 200,
            headers: HashMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn empty_body_is_not_json() {
        assert_eq!(json_from_response(response(b"")), Err(RustSideError::ResponseBodyWasNil));
    }

    #[test]
    fn invalid_body_is_not_json() {
        assert!(matches!(
            json_from_response(response(b"<html>")),
            Err(RustSideError::UnableToJSONDeserializeHTTPResponseBody { .. })
        ));
    }

    #[test]
    fn body_parses_as_json() {
        assert_eq!(
            json_from_response(response(br#"{"feed":{}}"#)),
            Ok(serde_json::json!({ "feed": {} }))
        );
    }
}
