mod cache_policy;
mod ffi_networking_error;
mod ffi_networking_executor;
mod ffi_networking_outcome;
mod ffi_networking_outcome_listener;
mod ffi_networking_request;
mod ffi_networking_response;
mod http_method;

pub use cache_policy::*;
pub use ffi_networking_error::*;
pub use ffi_networking_executor::*;
pub use ffi_networking_outcome::*;
pub use ffi_networking_outcome_listener::*;
pub use ffi_networking_request::*;
pub use ffi_networking_response::*;
pub use http_method::*;
