//! Terminal UI utilities for status lines and formatted output.
//!
//! Everything here writes to stderr so that rendered artifacts printed to
//! stdout (Markdown, page skeletons) stay pipeable.
//!
//! # Examples
//!
//! ```no_run
//! use blockprint_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Extracting annotations...");
//! spinner.finish("Extracted 12 entries");
//! ui::success("Manifest written");
//! ui::warning("special-case file 'hooks/useDataFetch.ts' does not exist; skipped");
//! ```

mod format;
mod messages;
mod prompt;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, print_manifest_summary};
pub use messages::{error, info, success, warning};
pub use prompt::{Prompter, TermPrompter};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(true);

const CI_VARS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"];

/// True when any well-known CI variable is set.
pub fn is_ci() -> bool {
    CI_VARS.iter().any(|var| std::env::var_os(var).is_some())
}

/// `NO_COLOR` beats `FORCE_COLOR`; otherwise color only an attended stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        false
    } else if std::env::var_os("FORCE_COLOR").is_some() {
        true
    } else {
        console::user_attended_stderr()
    }
}

/// Decide once whether status lines are colored.
///
/// `no_color` comes from the `--no-color` flag and wins over the environment.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
