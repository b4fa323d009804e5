pub const TOP_FREE_URL: &str = "https://itunes.apple.com/us/rss/topfreeapplications/limit=10/json";
pub const TOP_PAID_URL: &str = "https://itunes.apple.com/us/rss/toppaidapplications/limit=10/json";
pub const HTTPBIN_POST_URL: &str = "http://httpbin.org/post";

/// Enforced FFI side, Rust only forwards it on every request.
pub const REQUEST_TIMEOUT_SECONDS: u64 = 60;
