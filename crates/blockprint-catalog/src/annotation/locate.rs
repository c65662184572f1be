//! Locating marker comment blocks and the declaration they document.

/// Byte ranges of one `/** ... */` block carrying the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the opening `/**`.
    pub start: usize,
    /// Offset just past the closing `*/`.
    pub end: usize,
    /// One-based line of the opening `/**`.
    pub line: usize,
}

/// A marker block together with the identifier of the declaration after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedBlock<'a> {
    /// Block text between `/**` and `*/`.
    pub body: &'a str,
    /// Identifier bound by the first recognized declaration after the block.
    pub identifier: String,
    /// One-based line of the opening `/**`.
    pub line: usize,
}

/// Find every comment block whose first content line is the marker token.
///
/// `/**/` is an empty comment, not an opener. When a candidate block turns out
/// not to carry the marker, scanning resumes just inside it, so a stray `/**`
/// (a glob in a line comment, say) cannot swallow the marker block after it.
pub fn locate_blocks(text: &str, marker: &str) -> Vec<BlockSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find("/**") {
        let start = cursor + found;
        let body_start = start + 3;
        if text[body_start..].starts_with('/') {
            cursor = body_start + 1;
            continue;
        }
        let Some(close) = text[body_start..].find("*/") else {
            break;
        };
        let body_end = body_start + close;
        let end = body_end + 2;

        if starts_with_marker(&text[body_start..body_end], marker) {
            spans.push(BlockSpan {
                start,
                end,
                line: line_of(text, start),
            });
            cursor = end;
        } else {
            cursor = body_start;
        }
    }

    spans
}

/// Find the first marker block and the identifier it documents.
///
/// Only the first marker block is considered. Lines after it that do not
/// match a recognized declaration shape are passed over; when no line
/// matches, the text documents nothing and `None` is returned.
pub fn locate_block<'a>(text: &'a str, marker: &str) -> Option<LocatedBlock<'a>> {
    let span = locate_blocks(text, marker).into_iter().next()?;
    let identifier = text[span.end..].lines().find_map(declared_identifier)?;

    Some(LocatedBlock {
        body: &text[span.start + 3..span.end - 2],
        identifier,
        line: span.line,
    })
}

/// Identifier bound by `line` when it has one of the recognized declaration shapes.
///
/// Recognized: `const X`, `export const X`, `function X`, `export function X`
/// and `export default function X`, followed by `=`, `(`, `<`, `: React.FC`,
/// or a type annotation whose initializer is an arrow function.
pub fn declared_identifier(line: &str) -> Option<String> {
    const KEYWORDS: [&str; 5] = [
        "export default function ",
        "export const ",
        "export function ",
        "const ",
        "function ",
    ];

    let line = line.trim();
    let rest = KEYWORDS
        .iter()
        .find_map(|keyword| line.strip_prefix(keyword))?
        .trim_start();

    let ident_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(rest.len());
    if ident_len == 0 {
        return None;
    }
    let (identifier, tail) = rest.split_at(ident_len);
    let tail = tail.trim_start();

    let recognized = match tail.chars().next() {
        Some('=') | Some('(') | Some('<') => true,
        Some(':') => {
            let annotation = tail[1..].trim_start();
            annotation.starts_with("React.FC") || initializer_is_function(annotation)
        }
        _ => false,
    };

    recognized.then(|| identifier.to_string())
}

fn initializer_is_function(annotation: &str) -> bool {
    match annotation.split_once('=') {
        Some((_, initializer)) => {
            let initializer = initializer.trim_start();
            (initializer.starts_with('(') || initializer.starts_with("async"))
                && initializer.contains("=>")
        }
        None => false,
    }
}

fn starts_with_marker(body: &str, marker: &str) -> bool {
    body.lines()
        .map(strip_decoration)
        .find(|line| !line.is_empty())
        .and_then(|line| line.split_whitespace().next())
        .is_some_and(|token| token == marker)
}

/// Trim a comment line and drop its leading `*`.
pub(crate) fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('*').unwrap_or(line).trim()
}

pub(crate) fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
