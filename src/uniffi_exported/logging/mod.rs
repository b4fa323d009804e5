mod install_logging;

pub use install_logging::*;
