use crate::prelude::*;

/// A "network antenna" installed from FFI side (Swift side), e.g. a thin
/// wrapper around `URLSession`, which performs the actual HTTP I/O.
#[uniffi::export(with_foreign)]
pub trait FFINetworkingExecutor: Send + Sync {
    /// Rust will tell the executor to perform `request` by calling this
    /// function. Once the request has finished (Success/Failure) the
    /// executor passes back the outcome using `listener_rust_side`.
    fn execute_networking_request(
        &self,
        request: FFINetworkingRequest,
        listener_rust_side: Arc<FFINetworkingOutcomeListener>,
    ) -> Result<(), FFISideError>;
}

impl FFIOperationExecutor<FFINetworkingOutcomeListener> for Arc<dyn FFINetworkingExecutor> {
    fn execute_request(
        &self,
        request: <FFINetworkingOutcomeListener as IsOutcomeListener>::Request,
        listener_rust_side: FFINetworkingOutcomeListener,
    ) -> Result<(), FFISideError> {
        self.execute_networking_request(request, listener_rust_side.into())
    }
}
