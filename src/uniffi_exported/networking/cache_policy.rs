use crate::prelude::*;

/// How the FFI side should treat its local URL cache, mirrors
/// `[Swift]NSURLRequest.CachePolicy`.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Always hit the network, never read a locally cached response.
    ReloadIgnoringLocalCacheData,

    /// Let the platform decide based on the HTTP caching headers.
    UseProtocolCachePolicy,
}
