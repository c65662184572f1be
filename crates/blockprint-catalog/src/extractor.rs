use crate::annotation::{locate_block, locate_blocks, parse, tokenize, Diagnostic};
use crate::model::CatalogEntry;

/// Marker token that opens an annotation block unless configured otherwise.
pub const DEFAULT_MARKER: &str = "@wizard";

/// Result of extracting one annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    /// The entry, with an empty `file_path` for the caller to fill in.
    pub entry: CatalogEntry,
    /// Identifier bound by the declaration following the block.
    pub identifier: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs locate, tokenize and parse over source text.
#[derive(Debug, Clone)]
pub struct Extractor {
    marker: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Extractor {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Extract the first annotated declaration in `source`.
    ///
    /// Returns `None` when there is no marker block or no recognized
    /// declaration after it.
    pub fn extract(&self, source: &str) -> Option<ExtractedEntry> {
        let block = locate_block(source, &self.marker)?;
        let tokens = tokenize(block.body, block.line);
        let marker_tag = self.marker.strip_prefix('@').unwrap_or(&self.marker);
        let (entry, diagnostics) = parse(&tokens, marker_tag).into_entry(&block.identifier);

        Some(ExtractedEntry {
            entry,
            identifier: block.identifier,
            diagnostics,
        })
    }

    /// Extract the declaration documented by the `index`-th marker block
    /// (zero-based).
    ///
    /// The source is re-sliced from that block onward and run through
    /// [`Extractor::extract`], so line numbers in diagnostics stay relative to
    /// the whole file.
    pub fn extract_nth(&self, source: &str, index: usize) -> Option<ExtractedEntry> {
        let span = locate_blocks(source, &self.marker).into_iter().nth(index)?;
        let mut extracted = self.extract(&source[span.start..])?;
        for diagnostic in &mut extracted.diagnostics {
            diagnostic.line += span.line - 1;
        }
        Some(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME_CONTEXT: &str = r#"import React, { createContext } from 'react';

/**
 * @wizard
 * @name ThemeProvider
 * @description Provides theme state.
 * @tags theme, context
 * @category utils
 * @props
 * - name: children
 * type: React.ReactNode
 * description: Wrapped tree.
 */
export const ThemeProvider: React.FC<ThemeProviderProps> = ({ children }) => {
  return null;
};

/**
 * @wizard
 * @name useTheme
 * @description Reads the current theme.
 * @category hooks
 * @returns
 * - name: theme
 * type: ThemeName
 * description: Active theme.
 * - name: oops
 */
export const useTheme = () => useContext(ThemeContext);
"#;

    #[test]
    fn extracts_first_block() {
        let extracted = Extractor::default().extract(THEME_CONTEXT).unwrap();
        assert_eq!(extracted.identifier, "ThemeProvider");
        assert_eq!(extracted.entry.name, "ThemeProvider");
        assert_eq!(extracted.entry.tags, vec!["theme", "context"]);
        assert_eq!(extracted.entry.props.len(), 1);
        assert!(extracted.diagnostics.is_empty());
    }

    #[test]
    fn extracts_later_block_with_file_relative_lines() {
        let extracted = Extractor::default().extract_nth(THEME_CONTEXT, 1).unwrap();
        assert_eq!(extracted.entry.name, "useTheme");
        assert_eq!(extracted.entry.category, "hooks");
        let returns = extracted.entry.returns.unwrap();
        assert_eq!(returns.len(), 1);
        assert_eq!(returns[0].type_name, "ThemeName");

        assert_eq!(extracted.diagnostics.len(), 1);
        let dropped_line = THEME_CONTEXT
            .lines()
            .position(|line| line.contains("name: oops"))
            .unwrap()
            + 1;
        assert_eq!(extracted.diagnostics[0].line, dropped_line);
    }

    #[test]
    fn missing_block_index_yields_nothing() {
        assert!(Extractor::default().extract_nth(THEME_CONTEXT, 2).is_none());
    }

    #[test]
    fn name_falls_back_to_identifier() {
        let source = "/**\n * @wizard\n * @description Shows a card.\n */\nexport function Card(props: CardProps) {}\n";
        let extracted = Extractor::default().extract(source).unwrap();
        assert_eq!(extracted.entry.name, "Card");
        assert_eq!(extracted.entry.description, "Shows a card.");
    }

    #[test]
    fn custom_marker() {
        let source = "/**\n * @block\n * @name Tile\n */\nconst Tile = () => null;\n";
        assert!(Extractor::default().extract(source).is_none());
        let extracted = Extractor::new("@block").extract(source).unwrap();
        assert_eq!(extracted.entry.name, "Tile");
        assert!(extracted.diagnostics.is_empty());
    }
}
