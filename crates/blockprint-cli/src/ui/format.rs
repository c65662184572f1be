//! Formatting utilities for durations and manifest summaries.

use blockprint_catalog::{Collection, Manifest};
use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;

use super::colors_enabled;

/// Milliseconds under a second, fractional seconds under a minute, then
/// whole minutes and seconds.
///
/// ```
/// use std::time::Duration;
/// use blockprint_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(8)), "8ms");
/// assert_eq!(format_duration(Duration::from_millis(2250)), "2.25s");
/// assert_eq!(format_duration(Duration::from_secs(61)), "1m 1s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    match duration.as_millis() {
        ms @ 0..1000 => format!("{ms}ms"),
        1000..60_000 => format!("{:.2}s", duration.as_secs_f64()),
        _ => {
            let secs = duration.as_secs();
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}

/// Print the entry count of every collection to stderr.
pub fn print_manifest_summary(manifest: &Manifest, elapsed: Duration) {
    let width = (Term::stderr().size().1 as usize).clamp(20, 60);
    let rule = "─".repeat(width);

    if colors_enabled() {
        eprintln!("\n{}", "Manifest Summary".bold().underline());
    } else {
        eprintln!("\nManifest Summary");
    }
    eprintln!("{}", rule);

    for collection in Collection::ALL {
        let count = manifest.collection(collection).len();
        if colors_enabled() {
            eprintln!(
                "  {} {:<12} {}",
                "▸".blue(),
                collection.as_str().bright_white().bold(),
                count.dimmed()
            );
        } else {
            eprintln!("  ▸ {:<12} {}", collection.as_str(), count);
        }
    }

    eprintln!("{}", rule);
    eprintln!(
        "  Total: {} entries in {}",
        manifest.len(),
        format_duration(elapsed)
    );
}
