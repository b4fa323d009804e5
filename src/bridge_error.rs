use crate::prelude::*;
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum FFISideError {
    #[error(transparent)]
    Networking {
        #[from]
        error: FFINetworkingError,
    },

    #[error("FFI side callback failed unexpectedly: {reason}")]
    UnexpectedCallbackError { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FFISideError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedCallbackError {
            reason: value.reason,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum RustSideError {
    #[error("Bad response code: {status_code}")]
    BadResponseCode { status_code: u16 },

    #[error("HTTP Body of response from Swift was empty")]
    ResponseBodyWasNil,

    #[error("Unable to JSON deserialize HTTP response body: {underlying}")]
    UnableToJSONDeserializeHTTPResponseBody { underlying: String },

    #[error("Request parameters are not valid JSON: {underlying}")]
    InvalidJSONParameters { underlying: String },

    #[error("Invalid URL: '{string}'")]
    InvalidURL { string: String },

    #[error("Failed to receive response from Swift")]
    FailedToReceiveResponseFromSwift,

    #[error("Failed to propagate FFI operation result back to dispatcher")]
    FailedToPropagateResultFromFFIOperationBackToDispatcher,
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum FFIBridgeError {
    #[error(transparent)]
    FromRust {
        #[from]
        error: RustSideError,
    },

    #[error(transparent)]
    FromFFI {
        #[from]
        error: FFISideError,
    },
}

impl From<FFINetworkingError> for FFIBridgeError {
    fn from(value: FFINetworkingError) -> Self {
        FFISideError::from(value).into()
    }
}
