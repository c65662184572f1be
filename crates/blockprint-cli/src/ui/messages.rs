//! One-line status messages on stderr.

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

fn status(symbol: &str, symbol_style: Style, message: &str, message_style: Style) {
    if colors_enabled() {
        eprintln!("{} {}", symbol.style(symbol_style), message.style(message_style));
    } else {
        eprintln!("{symbol} {message}");
    }
}

/// ```no_run
/// use blockprint_cli::ui::success;
///
/// success("Wrote src/wizardManifest.ts");
/// ```
pub fn success(message: &str) {
    status("✓", Style::new().green().bold(), message, Style::new());
}

pub fn info(message: &str) {
    status("ℹ", Style::new().blue().bold(), message, Style::new());
}

/// Used for every recovered extraction problem.
pub fn warning(message: &str) {
    status("⚠", Style::new().yellow().bold(), message, Style::new().yellow());
}

pub fn error(message: &str) {
    status("✗", Style::new().red().bold(), message, Style::new().red());
}
