use crate::prelude::*;

/// Rust constructs one or several dispatchers, which are being passed a
/// handler from FFI side (Swift side) implementing [`FFIOperationExecutor`],
/// it can e.g. be `URLSession` in Swift which supports making network
/// calls.
pub struct FFIOperationDispatcher<L: IsOutcomeListener> {
    /// Handler FFI side, receiving operations from us (Rust side),
    /// and passes the outcome of the operation back to us (Rust side).
    handler: Box<dyn FFIOperationExecutor<L>>,
}

impl<L: IsOutcomeListener> FFIOperationDispatcher<L> {
    pub fn new(handler: impl FFIOperationExecutor<L> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub(crate) async fn dispatch(
        &self,
        operation: L::Request,
    ) -> Result<L::Response, FFIBridgeError> {
        // Underlying tokio channel used to get outcome from Swift back to Rust.
        let (sender, receiver) = channel::<L::Outcome>();

        // Our callback we pass to Swift
        let outcome_listener = FFIOperationOutcomeListener::new(sender);

        // Pass operation to Swift, which will call `notify_outcome` on the listener
        self.handler
            .execute_request(operation, outcome_listener.into())
            .map_err(FFIBridgeError::from)?;

        // Await response from Swift
        let outcome = receiver
            .await
            .map_err(|_| RustSideError::FailedToReceiveResponseFromSwift)?;

        L::response_from(outcome)
    }
}
