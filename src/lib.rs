mod bridge_error;
mod internal;
mod uniffi_exported;

pub mod prelude {
    pub use crate::bridge_error::*;
    pub use crate::internal::*;
    pub use crate::uniffi_exported::*;

    pub(crate) use enum_as_inner::EnumAsInner;
    pub(crate) use serde::Serialize;
    pub(crate) use serde_json::Value;
    pub(crate) use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    pub(crate) use tokio::sync::oneshot::{channel, Sender};
    pub(crate) use tracing::{debug, info, warn};
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};
}

pub use prelude::*;

uniffi::setup_scaffolding!();
