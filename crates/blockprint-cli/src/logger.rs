//! Logging infrastructure for the blockprint CLI.
//!
//! The library crates only emit `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! ```rust,no_run
//! use blockprint_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Extracting annotations");
//! debug!("Visiting {}", "components/Button.tsx");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "blockprint_catalog=debug,blockprint_wizard=debug,blockprint_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "blockprint_catalog=info,blockprint_wizard=info,blockprint_cli=info";

/// Install the stderr subscriber.
///
/// `--verbose` turns on debug events from the blockprint crates and `--quiet`
/// keeps only errors. Without either flag `RUST_LOG` is honored, falling back
/// to info. Stdout stays free for rendered output.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
