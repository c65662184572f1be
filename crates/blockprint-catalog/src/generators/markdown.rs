use std::fmt::Write;

use crate::model::CatalogEntry;
use crate::reference::ReferenceIndex;

/// Render the reference index as GitHub-flavoured Markdown.
pub fn render_markdown(index: &ReferenceIndex<'_>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Component & Library Reference");

    if index.is_empty() {
        let _ = writeln!(output, "\n_No documented building blocks found._");
        return output;
    }

    for group in &index.groups {
        let _ = writeln!(output, "\n## {}", group.title());
        for entry in &group.entries {
            render_entry(&mut output, entry);
        }
    }

    output
}

fn render_entry(buffer: &mut String, entry: &CatalogEntry) {
    let _ = writeln!(buffer, "\n### {}\n", entry.name);

    if let Some(description) = non_empty(&entry.description) {
        let _ = writeln!(buffer, "{description}\n");
    }

    if !entry.tags.is_empty() {
        let tags: Vec<_> = entry.tags.iter().map(|tag| format!("`{tag}`")).collect();
        let _ = writeln!(buffer, "Tags: {}\n", tags.join(" "));
    }

    let _ = writeln!(buffer, "**Properties**\n");
    if entry.props.is_empty() {
        let _ = writeln!(buffer, "No properties.\n");
    } else {
        for prop in &entry.props {
            let mut line = format!("- **{}**: `{}` - {}", prop.name, prop.type_name, prop.description);
            if let Some(default) = prop.default.as_deref() {
                let _ = write!(line, " (default: `{default}`)");
            }
            let _ = writeln!(buffer, "{line}");
        }
        buffer.push('\n');
    }

    if let Some(returns) = entry.returns.as_ref().filter(|returns| !returns.is_empty()) {
        let _ = writeln!(buffer, "**Returns**\n");
        for ret in returns {
            let _ = writeln!(
                buffer,
                "- **{}**: `{}` - {}",
                ret.name, ret.type_name, ret.description
            );
        }
        buffer.push('\n');
    }

    if let Some(data) = entry.available_data.as_ref().filter(|data| !data.is_empty()) {
        let _ = writeln!(buffer, "**Available data**\n");
        for name in data {
            let _ = writeln!(buffer, "- `{name}`");
        }
        buffer.push('\n');
    }

    let _ = writeln!(buffer, "Source: `{}`", entry.file_path);
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
