//! Property tests for the annotation tokenizer and parser.

use blockprint_catalog::annotation::{parse, tokenize};
use blockprint_catalog::Extractor;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = (String, String, String, Option<String>)> {
    (
        "[a-zA-Z][a-zA-Z0-9]{0,8}",
        "[a-zA-Z'|\\[\\] ]{1,16}",
        "[a-zA-Z ,.]{1,24}",
        prop::option::of("[a-z0-9]{1,6}"),
    )
        .prop_map(|(name, ty, description, default)| {
            (name, ty.trim().to_string(), description.trim().to_string(), default)
        })
        .prop_filter("type and description need text", |(_, ty, description, _)| {
            !ty.is_empty() && !description.is_empty()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Arbitrary text never panics and tokens keep their line numbers.
    #[test]
    fn tokenizer_is_total(body in "(?s).{0,400}", first_line in 1usize..500) {
        let tokens = tokenize(&body, first_line);
        prop_assert_eq!(tokens.len(), body.lines().count());
        for (offset, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.line, first_line + offset);
        }
        let _ = parse(&tokens, "wizard");
    }

    /// Well-formed records survive, and `default` is present only when written.
    #[test]
    fn well_formed_props_are_kept(records in prop::collection::vec(record_strategy(), 0..6)) {
        let mut source = String::from("/**\n * @wizard\n * @name Generated\n * @props\n");
        for (name, ty, description, default) in &records {
            source.push_str(&format!(" * - name: {name}\n * type: {ty}\n * description: {description}\n"));
            if let Some(default) = default {
                source.push_str(&format!(" * default: {default}\n"));
            }
        }
        source.push_str(" */\nexport const Generated = () => null;\n");

        let extracted = Extractor::default().extract(&source).unwrap();
        prop_assert!(extracted.diagnostics.is_empty());
        prop_assert_eq!(extracted.entry.props.len(), records.len());
        for (prop, (name, ty, description, default)) in extracted.entry.props.iter().zip(&records) {
            prop_assert_eq!(&prop.name, name);
            prop_assert_eq!(&prop.type_name, ty);
            prop_assert_eq!(&prop.description, description);
            prop_assert_eq!(&prop.default, default);
        }
    }

    /// Without an `@name`, the entry is named after the declaration.
    #[test]
    fn name_falls_back_to_identifier(identifier in "[A-Z][A-Za-z0-9_]{0,12}") {
        let source = format!("/**\n * @wizard\n * @category ui\n */\nexport const {identifier} = () => null;\n");
        let extracted = Extractor::default().extract(&source).unwrap();
        prop_assert_eq!(&extracted.entry.name, &identifier);
    }
}
