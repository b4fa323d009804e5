mod image_response_cache;

pub use image_response_cache::*;
