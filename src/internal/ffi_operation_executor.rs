use crate::prelude::*;

/// Rust side view of a handler living FFI side (Swift side), e.g. a wrapper
/// around `URLSession`, which carries out an operation of kind `L::Request`
/// and reports back through the `listener_rust_side`.
pub trait FFIOperationExecutor<L: IsOutcomeListener>: Send + Sync {
    fn execute_request(
        &self,
        request: L::Request,
        listener_rust_side: L,
    ) -> Result<(), FFISideError>;
}
