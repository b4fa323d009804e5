mod ffi_operation_dispatcher;
mod ffi_operation_executor;
mod ffi_operation_outcome_listener;
mod is_outcome_listener;
mod json_path;

pub use ffi_operation_dispatcher::*;
pub use ffi_operation_executor::*;
pub use ffi_operation_outcome_listener::*;
pub use is_outcome_listener::*;
pub use json_path::*;
