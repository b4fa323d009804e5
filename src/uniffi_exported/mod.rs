mod feed;
mod image_cache;
mod logging;
mod networking;
mod router;
mod router_service;

pub use feed::*;
pub use image_cache::*;
pub use logging::*;
pub use networking::*;
pub use router::*;
pub use router_service::*;
