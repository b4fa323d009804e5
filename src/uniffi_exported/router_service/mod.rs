mod fetch_outcome;
mod router_service;

pub use fetch_outcome::*;
pub use router_service::*;
