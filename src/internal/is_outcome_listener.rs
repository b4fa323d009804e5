use crate::prelude::*;

/// Ties a listener handed to FFI side to the request it listens for, and to
/// how its outcome splits into a response or a failure.
pub trait IsOutcomeListener: From<FFIOperationOutcomeListener<Self::Outcome>> {
    /// What Rust asks FFI side to carry out.
    type Request;
    /// What FFI side produced on success.
    type Response;
    /// What FFI side reports on failure.
    type Failure: Into<FFISideError>;
    /// Passed by FFI side to the listener, one of the two above.
    type Outcome: Into<Result<Self::Response, Self::Failure>>;

    /// Splits `outcome`, lifting a failure into a [`FFIBridgeError::FromFFI`].
    fn response_from(outcome: Self::Outcome) -> Result<Self::Response, FFIBridgeError> {
        let result: Result<Self::Response, Self::Failure> = outcome.into();
        result.map_err(|failure| FFIBridgeError::FromFFI {
            error: failure.into(),
        })
    }
}
