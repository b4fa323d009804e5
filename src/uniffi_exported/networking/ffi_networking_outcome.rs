use crate::prelude::*;

/// UniFFI does not allow us to pass `[Swift]Result` <-> `[Rust]Result`,
/// so this is an implementation of that, letting a [`FFINetworkingExecutor`]
/// pass the outcome of a request back to Rust land.
#[derive(Enum, Clone, Debug, PartialEq, Eq)]
pub enum FFINetworkingOutcome {
    Success { value: FFINetworkingResponse },
    Failure { error: FFINetworkingError },
}

impl From<FFINetworkingOutcome> for Result<FFINetworkingResponse, FFINetworkingError> {
    fn from(value: FFINetworkingOutcome) -> Self {
        match value {
            FFINetworkingOutcome::Success { value } => Ok(value),
            FFINetworkingOutcome::Failure { error } => Err(error),
        }
    }
}
