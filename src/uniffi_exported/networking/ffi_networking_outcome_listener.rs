use crate::prelude::*;

#[derive(Object)]
pub struct FFINetworkingOutcomeListener {
    outcome_listener: FFIOperationOutcomeListener<FFINetworkingOutcome>,
}

impl IsOutcomeListener for FFINetworkingOutcomeListener {
    type Request = FFINetworkingRequest;
    type Response = FFINetworkingResponse;
    type Failure = FFINetworkingError;
    type Outcome = FFINetworkingOutcome;
}

impl From<FFIOperationOutcomeListener<FFINetworkingOutcome>> for FFINetworkingOutcomeListener {
    fn from(value: FFIOperationOutcomeListener<FFINetworkingOutcome>) -> Self {
        Self::with_outcome_listener(value)
    }
}

impl FFINetworkingOutcomeListener {
    pub fn with_outcome_listener(
        outcome_listener: FFIOperationOutcomeListener<FFINetworkingOutcome>,
    ) -> Self {
        Self { outcome_listener }
    }
}

#[export]
impl FFINetworkingOutcomeListener {
    /// This is called from FFI Side (Swift side), inside the implementation of
    /// `execute_networking_request` on a [`FFINetworkingExecutor`], when the
    /// request has finished.
    pub fn notify_outcome(&self, outcome: FFINetworkingOutcome) {
        self.outcome_listener.notify_outcome(outcome)
    }
}
