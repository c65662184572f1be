use super::locate::strip_decoration;

/// One classified line of an annotation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// One-based line in the source file.
    pub line: usize,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `@tag payload`
    Tag { name: String, payload: String },
    /// `- key: value`, the first line of a record.
    RecordStart { key: String, value: String },
    /// `key: value`, a continuation line of a record.
    RecordField { key: String, value: String },
    /// Any other non-empty line.
    Text(String),
    Blank,
}

/// Split a block body into classified lines.
///
/// `first_line` is the file line on which the body starts.
pub fn tokenize(body: &str, first_line: usize) -> Vec<Token> {
    body.lines()
        .enumerate()
        .map(|(offset, raw)| Token {
            line: first_line + offset,
            kind: classify(strip_decoration(raw)),
        })
        .collect()
}

fn classify(line: &str) -> TokenKind {
    if line.is_empty() {
        return TokenKind::Blank;
    }

    if let Some(rest) = line.strip_prefix('@') {
        let (name, payload) = match rest.split_once(char::is_whitespace) {
            Some((name, payload)) => (name, payload.trim()),
            None => (rest, ""),
        };
        return TokenKind::Tag {
            name: name.to_string(),
            payload: payload.to_string(),
        };
    }

    if let Some(rest) = line.strip_prefix('-') {
        return match key_value(rest.trim_start()) {
            Some((key, value)) => TokenKind::RecordStart { key, value },
            None => TokenKind::Text(line.to_string()),
        };
    }

    match key_value(line) {
        Some((key, value)) => TokenKind::RecordField { key, value },
        None => TokenKind::Text(line.to_string()),
    }
}

fn key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let is_word = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then(|| (key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_block_lines() {
        let body = "\n * @wizard\n * @tags a, b\n * - name: size\n * type: 'sm' | 'md'\n *\n * Free prose here\n ";
        let kinds: Vec<_> = tokenize(body, 10).into_iter().map(|t| t.kind).collect();

        assert_eq!(kinds[0], TokenKind::Blank);
        assert_eq!(
            kinds[1],
            TokenKind::Tag {
                name: "wizard".into(),
                payload: String::new()
            }
        );
        assert_eq!(
            kinds[2],
            TokenKind::Tag {
                name: "tags".into(),
                payload: "a, b".into()
            }
        );
        assert_eq!(
            kinds[3],
            TokenKind::RecordStart {
                key: "name".into(),
                value: "size".into()
            }
        );
        assert_eq!(
            kinds[4],
            TokenKind::RecordField {
                key: "type".into(),
                value: "'sm' | 'md'".into()
            }
        );
        assert_eq!(kinds[5], TokenKind::Blank);
        assert_eq!(kinds[6], TokenKind::Text("Free prose here".into()));
    }

    #[test]
    fn values_keep_inner_colons() {
        let tokens = tokenize("description: Called as fn(a: string)", 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::RecordField {
                key: "description".into(),
                value: "Called as fn(a: string)".into()
            }
        );
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn prose_with_spaces_before_colon_is_text() {
        let tokens = tokenize("Note that: this is prose", 1);
        assert_eq!(tokens[0].kind, TokenKind::Text("Note that: this is prose".into()));
    }
}
