//! Diagnostic logging.
//!
//! Logs are written to stderr through `tracing`. `--verbose` turns on debug
//! output for this crate; otherwise `RUST_LOG` is honored and the default
//! only shows warnings.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "tbox_cli=warn";
const VERBOSE_FILTER: &str = "tbox_cli=debug";

/// Builds the filter for the given verbosity.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(!crate::output::is_no_color()),
        )
        .try_init();
}
