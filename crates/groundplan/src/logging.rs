//! stderr log subscriber for the CLI.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: explicit directives win, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|err| CliError::invalid(format!("log filter {directives:?}: {err}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global fmt subscriber. A second call is a no-op.
pub fn init(directives: Option<&str>) -> Result<()> {
    let filter = build_filter(directives)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_crate_directives() {
        assert!(build_filter(Some("groundplan_render=trace,warn")).is_ok());
    }

    #[test]
    fn rejects_malformed_directives() {
        let err = build_filter(Some("groundplan=loud")).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }
}
