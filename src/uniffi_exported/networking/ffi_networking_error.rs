use crate::prelude::*;
use thiserror::Error as ThisError;

/// Failures of the HTTP transport FFI side, e.g. from `URLSession`.
#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError)]
pub enum FFINetworkingError {
    /// The host could not build a request for `url`, e.g. `URL(string:)`
    /// returned `nil`.
    #[error("Host rejected request URL '{url}'")]
    InvalidRequestURL { url: String },

    /// Connectivity loss, timeout, TLS failure and the like. `status_code`
    /// is set when the host got as far as a response.
    #[error(
        "Request failed, status: {:?}, server message: {:?}, transport error: {:?}",
        status_code,
        server_message,
        transport_error
    )]
    RequestFailed {
        status_code: Option<u16>,
        transport_error: Option<String>,
        server_message: Option<String>,
    },
}
