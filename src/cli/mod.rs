//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::error::WidgetError;

const FAILURE: i32 = 1;

/// Maps a top-level error to a process exit code.
///
/// Failures of the translation service or the platform collaborators are
/// `EX_UNAVAILABLE`; an unreadable config file is `EX_CONFIG`.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.chain().any(|cause| cause.is::<WidgetError>()) {
        exitcode::UNAVAILABLE
    } else if err.chain().any(|cause| cause.is::<toml::de::Error>()) {
        exitcode::CONFIG
    } else {
        FAILURE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_for_widget_error() {
        let err = anyhow::Error::new(WidgetError::NetworkFailure("offline".to_string()));
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_exit_code_for_config_error() {
        let parse_err = toml::from_str::<toml::Table>("not = = toml").unwrap_err();
        let err = Err::<(), _>(parse_err)
            .context("Failed to parse config file")
            .unwrap_err();
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_default() {
        assert_eq!(exit_code(&anyhow::anyhow!("Input is empty")), FAILURE);
    }
}
