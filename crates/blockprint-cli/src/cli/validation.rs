/// Parse the boilerplate name used in the generation prompt.
///
/// The name ends up inside a sentence, so it must be a single non-empty line.
///
/// # Errors
///
/// Returns an error message when the name is blank or spans several lines.
pub fn parse_boilerplate(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Boilerplate name cannot be empty".to_string());
    }

    if trimmed.contains(['\n', '\r']) {
        return Err(format!(
            "Boilerplate name must fit on one line: '{}'",
            trimmed.escape_debug()
        ));
    }

    Ok(trimmed.to_string())
}
