//! Text produced by the last wizard step.
//!
//! Both texts are plain templates over a [`WizardSessionConfig`]; nothing
//! here parses or checks the generated code.

use std::fmt::Write;

use crate::error::Result;
use crate::session::{WizardSessionConfig, BLANK_LAYOUT};

const UNTITLED: &str = "Untitled Page";
const DEFAULT_THEME: &str = "light";

/// Knobs for the generated texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Boilerplate named in the prompt.
    pub boilerplate: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            boilerplate: "Fanta".to_string(),
        }
    }
}

/// Page skeleton and generation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub skeleton: String,
    pub prompt: String,
}

pub fn generate(config: &WizardSessionConfig, options: &OutputOptions) -> Result<GeneratedOutput> {
    let props_json = serde_json::to_string_pretty(&config.component_props)?;
    Ok(GeneratedOutput {
        skeleton: skeleton(config, &props_json),
        prompt: prompt(config, options, &props_json),
    })
}

fn title(config: &WizardSessionConfig) -> &str {
    Some(config.page_title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(UNTITLED)
}

fn theme(config: &WizardSessionConfig) -> &str {
    config
        .initial_theme
        .as_deref()
        .filter(|theme| !theme.is_empty())
        .unwrap_or(DEFAULT_THEME)
}

fn layout(config: &WizardSessionConfig) -> Option<&str> {
    config.layout.as_deref().filter(|layout| !layout.is_empty())
}

fn skeleton(config: &WizardSessionConfig, props_json: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated code for {}", title(config));
    let _ = writeln!(out, "// Layout: {}", layout(config).unwrap_or("None"));
    let _ = writeln!(out, "// Initial Theme: {}", theme(config));
    out.push('\n');
    let _ = writeln!(out, "import React from 'react';");
    out.push('\n');
    let _ = writeln!(out, "// Selected Components and their props:");
    let _ = writeln!(out, "const componentProps = {props_json};");
    out.push('\n');

    let wrapper = layout(config).filter(|layout| *layout != BLANK_LAYOUT);
    let indent = if wrapper.is_some() { "      " } else { "    " };

    let _ = writeln!(out, "export default function {}() {{", component_name(title(config)));
    let _ = writeln!(out, "  return (");
    let _ = writeln!(out, "    {}", wrapper.map_or("<>".to_string(), |name| format!("<{name}>")));
    if config.selected_components.is_empty() {
        let _ = writeln!(out, "{indent}{{/* No blocks selected */}}");
    }
    for block in &config.selected_components {
        let mut element = format!("{indent}<{block}");
        if let Some(values) = config.component_props.get(block) {
            for (prop, value) in values {
                let _ = write!(element, " {prop}=\"{}\"", escape_attribute(value));
            }
        }
        element.push_str(" />");
        let _ = writeln!(out, "{element}");
    }
    let _ = writeln!(out, "    {}", wrapper.map_or("</>".to_string(), |name| format!("</{name}>")));
    let _ = writeln!(out, "  );");
    let _ = writeln!(out, "}}");
    out
}

fn prompt(config: &WizardSessionConfig, options: &OutputOptions, props_json: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Generate a React/TypeScript page using the {} boilerplate.",
        options.boilerplate
    );
    let _ = writeln!(out, "The page title should be: \"{}\".", title(config));
    let _ = writeln!(
        out,
        "It should use the \"{}\" layout.",
        layout(config).unwrap_or(BLANK_LAYOUT)
    );
    let _ = writeln!(out, "The initial theme should be \"{}\".", theme(config));
    out.push('\n');
    let _ = writeln!(out, "Include the following components with these properties:");
    let _ = writeln!(out, "{props_json}");
    out.push('\n');
    let _ = writeln!(
        out,
        "Please provide the full JSX code, including all necessary imports."
    );
    out
}

/// `"sales overview"` becomes `SalesOverviewPage`.
fn component_name(title: &str) -> String {
    let mut name: String = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Generated");
    }
    if !name.ends_with("Page") {
        name.push_str("Page");
    }
    name
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
