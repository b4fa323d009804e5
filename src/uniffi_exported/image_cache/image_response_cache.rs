use crate::prelude::*;

/// Image responses keyed by URL, only complete downloads are kept.
#[derive(Object, Default)]
pub struct ImageResponseCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[export]
impl ImageResponseCache {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_response(&self, url: String) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(&url).cloned()
    }

    pub fn len(&self) -> u64 {
        self.entries.lock().map(|e| e.len() as u64).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageResponseCache {
    /// Stores `body` for `url` only if its length matches `content_length`
    /// exactly, a response without a declared length is never stored.
    /// Returns whether the body was stored.
    pub fn store_if_complete(&self, url: &str, body: &[u8], content_length: Option<u64>) -> bool {
        if content_length != Some(body.len() as u64) {
            debug!(
                url,
                ?content_length,
                received = body.len(),
                "Not caching incomplete image response."
            );
            return false;
        }
        let Ok(mut entries) = self.entries.lock() else {
            return false;
        };
        entries.insert(url.to_owned(), body.to_vec());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://is2.mzstatic.com/image/53x53.png";

    #[test]
    fn stores_when_length_matches() {
        let sut = ImageResponseCache::new();
        assert!(sut.store_if_complete(URL, &[1, 2, 3], Some(3)));
        assert_eq!(sut.cached_response(URL.to_owned()), Some(vec![1, 2, 3]));
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn skips_truncated_or_undeclared_bodies() {
        let sut = ImageResponseCache::new();
        assert!(!sut.store_if_complete(URL, &[1, 2], Some(3)));
        assert!(!sut.store_if_complete(URL, &[1, 2, 3, 4], Some(3)));
        assert!(!sut.store_if_complete(URL, &[1, 2, 3], None));
        assert!(sut.is_empty());
        assert_eq!(sut.cached_response(URL.to_owned()), None);
    }
}
