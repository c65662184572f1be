use crate::error::Result;
use crate::model::Manifest;

/// Pretty-printed JSON form of the manifest, newline-terminated.
///
/// Contains no timestamps, so unchanged input renders byte-identical output.
pub fn render_json(manifest: &Manifest) -> Result<String> {
    let mut output = serde_json::to_string_pretty(manifest)?;
    output.push('\n');
    Ok(output)
}
