//! Indeterminate progress for the extraction walk.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

use super::{colors_enabled, is_ci};

/// Spinner on stderr that is replaced by a single status line when done.
///
/// Nothing is drawn in CI or when stderr is redirected.
///
/// ```no_run
/// use blockprint_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Extracting annotations...");
/// spinner.finish("Extracted 12 entries");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if is_ci() || !console::user_attended_stderr() {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Clear the spinner and print a success line.
    pub fn finish(&self, message: &str) {
        self.pb.finish_and_clear();
        super::success(message);
    }

    /// Clear the spinner and print a failure line.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        if colors_enabled() {
            eprintln!("{} {}", "✗".red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_spinner_stops_ticking() {
        let spinner = Spinner::new("Extracting annotations...");
        spinner.set_message("Walking components");
        spinner.finish("Extracted 0 entries");
        assert!(spinner.pb.is_finished());
    }

    #[test]
    fn failed_spinner_is_finished() {
        let spinner = Spinner::new("Extracting annotations...");
        spinner.fail("Extraction failed");
        assert!(spinner.pb.is_finished());
    }
}
