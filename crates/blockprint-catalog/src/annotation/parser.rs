use thiserror::Error;

use super::tokenizer::{Token, TokenKind};
use crate::model::{CatalogEntry, PropSpec, ReturnSpec, DEFAULT_CATEGORY};

/// Non-fatal problem found while parsing an annotation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-based line in the source file.
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("`@{field}` repeated; the first value is kept")]
    DuplicateField { field: String },
    #[error("`@{field}` has no value")]
    EmptyField { field: String },
    #[error("unknown tag `@{tag}`")]
    UnknownTag { tag: String },
    #[error("record outside of a `@props` or `@returns` section")]
    StrayRecord,
    #[error("record dropped: {reason}")]
    MalformedRecord { reason: String },
    #[error("unexpected `{key}` line in record; ignored")]
    UnexpectedField { key: String },
}

/// Typed result of parsing one annotation block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationIr {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub props: Vec<PropSpec>,
    pub returns: Vec<ReturnSpec>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnnotationIr {
    /// Build the catalog entry, falling back to `identifier` for the name.
    pub fn into_entry(self, identifier: &str) -> (CatalogEntry, Vec<Diagnostic>) {
        let entry = CatalogEntry {
            name: self.name.unwrap_or_else(|| identifier.to_string()),
            description: self.description.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            file_path: String::new(),
            props: self.props,
            returns: (!self.returns.is_empty()).then_some(self.returns),
            available_data: None,
        };
        (entry, self.diagnostics)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Props,
    Returns,
    Other,
}

#[derive(Debug)]
struct RecordDraft {
    line: usize,
    section: Section,
    first_key: String,
    first_value: String,
    fields: Vec<(usize, String, String)>,
}

/// Parse tokens into an [`AnnotationIr`].
///
/// `marker_tag` is the marker without its `@`; it is accepted silently.
pub fn parse(tokens: &[Token], marker_tag: &str) -> AnnotationIr {
    let mut parser = Parser {
        ir: AnnotationIr::default(),
        section: Section::Header,
        draft: None,
        marker_tag,
    };
    for token in tokens {
        parser.feed(token);
    }
    parser.finish_record();
    parser.ir
}

struct Parser<'m> {
    ir: AnnotationIr,
    section: Section,
    draft: Option<RecordDraft>,
    marker_tag: &'m str,
}

impl Parser<'_> {
    fn feed(&mut self, token: &Token) {
        match &token.kind {
            TokenKind::Tag { name, payload } => {
                self.finish_record();
                self.tag(token.line, name, payload);
            }
            TokenKind::RecordStart { key, value } => {
                self.finish_record();
                match self.section {
                    Section::Props | Section::Returns => {
                        self.draft = Some(RecordDraft {
                            line: token.line,
                            section: self.section,
                            first_key: key.clone(),
                            first_value: value.clone(),
                            fields: Vec::new(),
                        });
                    }
                    Section::Header | Section::Other => {
                        self.diagnose(token.line, DiagnosticKind::StrayRecord);
                    }
                }
            }
            TokenKind::RecordField { key, value } => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.fields.push((token.line, key.clone(), value.clone()));
                } else if matches!(self.section, Section::Props | Section::Returns) {
                    self.diagnose(
                        token.line,
                        DiagnosticKind::MalformedRecord {
                            reason: format!("`{key}:` line without a preceding `- name:`"),
                        },
                    );
                }
            }
            TokenKind::Text(_) | TokenKind::Blank => self.finish_record(),
        }
    }

    fn tag(&mut self, line: usize, name: &str, payload: &str) {
        match name {
            "props" => self.section = Section::Props,
            "returns" => self.section = Section::Returns,
            "name" | "description" | "category" | "tags" => {
                self.section = Section::Header;
                self.scalar(line, name, payload);
            }
            tag if tag == self.marker_tag => self.section = Section::Header,
            other => {
                self.section = Section::Other;
                self.diagnose(
                    line,
                    DiagnosticKind::UnknownTag {
                        tag: other.to_string(),
                    },
                );
            }
        }
    }

    fn scalar(&mut self, line: usize, field: &str, payload: &str) {
        let already_set = match field {
            "name" => self.ir.name.is_some(),
            "description" => self.ir.description.is_some(),
            "category" => self.ir.category.is_some(),
            _ => self.ir.tags.is_some(),
        };
        if already_set {
            self.diagnose(
                line,
                DiagnosticKind::DuplicateField {
                    field: field.to_string(),
                },
            );
            return;
        }
        if payload.is_empty() {
            self.diagnose(
                line,
                DiagnosticKind::EmptyField {
                    field: field.to_string(),
                },
            );
            return;
        }

        let value = payload.to_string();
        match field {
            "name" => self.ir.name = Some(value),
            "description" => self.ir.description = Some(value),
            "category" => self.ir.category = Some(value),
            _ => {
                self.ir.tags = Some(
                    payload
                        .split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            }
        }
    }

    fn finish_record(&mut self) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        let line = draft.line;

        match build_record(draft) {
            Ok((record, extra)) => {
                for (extra_line, key) in extra {
                    self.diagnose(extra_line, DiagnosticKind::UnexpectedField { key });
                }
                match record {
                    Record::Prop(prop) => self.ir.props.push(prop),
                    Record::Return(ret) => self.ir.returns.push(ret),
                }
            }
            Err(reason) => self.diagnose(line, DiagnosticKind::MalformedRecord { reason }),
        }
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind) {
        self.ir.diagnostics.push(Diagnostic { line, kind });
    }
}

enum Record {
    Prop(PropSpec),
    Return(ReturnSpec),
}

type Extra = Vec<(usize, String)>;

fn build_record(draft: RecordDraft) -> Result<(Record, Extra), String> {
    if draft.first_key != "name" {
        return Err(format!(
            "records start with `- name:`, found `- {}:`",
            draft.first_key
        ));
    }
    if draft.first_value.is_empty() {
        return Err("empty `name`".to_string());
    }

    let mut fields = draft.fields.into_iter();
    let type_name = expect_field(fields.next(), "type", &draft.first_value)?;
    let description = expect_field(fields.next(), "description", &draft.first_value)?;

    let mut default = None;
    let mut extra = Vec::new();
    for (line, key, value) in fields {
        if key == "default" && default.is_none() && draft.section == Section::Props && !value.is_empty() {
            default = Some(value);
        } else {
            extra.push((line, key));
        }
    }

    let record = match draft.section {
        Section::Returns => Record::Return(ReturnSpec::new(
            draft.first_value,
            type_name,
            description,
        )),
        _ => Record::Prop(PropSpec {
            name: draft.first_value,
            type_name,
            description,
            default,
        }),
    };
    Ok((record, extra))
}

fn expect_field(
    field: Option<(usize, String, String)>,
    expected: &str,
    record: &str,
) -> Result<String, String> {
    match field {
        Some((_, key, value)) if key == expected && !value.is_empty() => Ok(value),
        Some((_, key, _)) if key == expected => {
            Err(format!("`{record}` has an empty `{expected}`"))
        }
        Some((_, key, _)) => Err(format!(
            "`{record}` expected `{expected}:` but found `{key}:`"
        )),
        None => Err(format!("`{record}` is missing `{expected}:`")),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    fn parse_body(body: &str) -> AnnotationIr {
        parse(&tokenize(body, 1), "wizard")
    }

    #[test]
    fn parses_scalar_fields_and_tags() {
        let ir = parse_body(
            "\n * @wizard\n * @name Foo\n * @description Bar\n * @tags a, b\n * @category widgets\n",
        );
        assert_eq!(ir.name.as_deref(), Some("Foo"));
        assert_eq!(ir.description.as_deref(), Some("Bar"));
        assert_eq!(ir.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(ir.category.as_deref(), Some("widgets"));
        assert!(ir.props.is_empty());
        assert!(ir.diagnostics.is_empty());
    }

    #[test]
    fn empty_tag_fragments_are_dropped() {
        let ir = parse_body("\n * @wizard\n * @tags chart,, bar ,\n");
        assert_eq!(ir.tags, Some(vec!["chart".to_string(), "bar".to_string()]));
    }

    #[test]
    fn parses_props_with_and_without_defaults() {
        let ir = parse_body(
            "\n * @wizard\n * @props\n * - name: variant\n * type: 'primary' | 'outline'\n * description: Visual style.\n * default: primary\n * - name: onClick\n * type: () => void\n * description: Click handler.\n * @category ui\n",
        );
        assert_eq!(ir.props.len(), 2);
        assert_eq!(ir.props[0].default.as_deref(), Some("primary"));
        assert_eq!(ir.props[1].name, "onClick");
        assert_eq!(ir.props[1].type_name, "() => void");
        assert_eq!(ir.props[1].default, None);
        assert_eq!(ir.category.as_deref(), Some("ui"));
    }

    #[test]
    fn returns_are_scoped_to_their_section() {
        let ir = parse_body(
            "\n * @wizard\n * @props\n * - name: initialData\n * type: T | null\n * description: Initial state.\n * @returns\n * - name: loading\n * type: boolean\n * description: True while fetching.\n",
        );
        assert_eq!(ir.props.len(), 1);
        assert_eq!(ir.returns.len(), 1);
        assert_eq!(ir.returns[0].name, "loading");
    }

    #[test]
    fn malformed_records_are_dropped_and_reported() {
        let ir = parse_body(
            "\n * @wizard\n * @props\n * - name: broken\n * description: no type line\n * - name: ok\n * type: string\n * description: fine\n",
        );
        assert_eq!(ir.props.len(), 1);
        assert_eq!(ir.props[0].name, "ok");
        assert_eq!(ir.diagnostics.len(), 1);
        assert_eq!(ir.diagnostics[0].line, 4);
        assert!(matches!(
            ir.diagnostics[0].kind,
            DiagnosticKind::MalformedRecord { .. }
        ));
    }

    #[test]
    fn blank_line_breaks_a_record() {
        let ir = parse_body(
            "\n * @wizard\n * @props\n * - name: gap\n *\n * type: string\n * description: split apart\n",
        );
        assert!(ir.props.is_empty());
        assert!(!ir.diagnostics.is_empty());
    }

    #[test]
    fn duplicate_and_unknown_tags_are_diagnosed() {
        let ir = parse_body("\n * @wizard\n * @name First\n * @name Second\n * @since 1.0\n");
        assert_eq!(ir.name.as_deref(), Some("First"));
        let kinds: Vec<_> = ir.diagnostics.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::DuplicateField {
                    field: "name".into()
                },
                DiagnosticKind::UnknownTag {
                    tag: "since".into()
                },
            ]
        );
    }

    #[test]
    fn into_entry_applies_defaults() {
        let ir = parse_body("\n * @wizard\n");
        let (entry, diagnostics) = ir.into_entry("Widget");
        assert_eq!(entry.name, "Widget");
        assert_eq!(entry.category, "uncategorized");
        assert!(entry.tags.is_empty());
        assert!(entry.props.is_empty());
        assert_eq!(entry.returns, None);
        assert!(diagnostics.is_empty());
    }
}
