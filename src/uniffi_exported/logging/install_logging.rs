use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber writing to stderr.
///
/// `filter` takes `EnvFilter` directives, e.g. `"network_mashup=debug"`.
/// When `None` or unparsable, `RUST_LOG` is used, else `info`. Only the
/// first call installs a subscriber, later calls return `false`.
#[uniffi::export]
pub fn install_logging(filter: Option<String>) -> bool {
    let env_filter = filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        install_logging(Some("network_mashup=debug".to_owned()));
        assert!(!install_logging(None));
    }
}
