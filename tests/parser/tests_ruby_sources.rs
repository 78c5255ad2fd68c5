//! Parser tests over whole Ruby sources

use crate::helpers::source_fixtures::*;
use proptest::prelude::*;
use rstest::rstest;
use yard_rbs::parser::{SyntaxKind, parse, tokenize};

fn definition_names(source: &str) -> Vec<String> {
    parse(source)
        .definitions
        .iter()
        .map(|d| d.name.to_string())
        .collect()
}

#[rstest]
#[case::class(CLASS_WITH_METHODS, &["method1", "method2"])]
#[case::singleton(DESCRIPTIONS_AND_ORDER, &["greet"])]
#[case::literals(LITERAL_LOOKALIKES, &["real"])]
#[case::mixed(MIXED_FOREIGN_TAG, &["save!"])]
fn test_fixture_definitions(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(definition_names(source), expected);
}

#[test]
fn test_literal_lookalikes_comments() {
    let parse = parse(LITERAL_LOOKALIKES);
    let texts: Vec<_> = parse.comments.iter().map(|c| c.text).collect();
    assert_eq!(texts.len(), 2);
    assert!(texts[0].starts_with("=begin"));
    assert!(texts[0].ends_with("=end"));
    assert_eq!(texts[1], "# @return [Array]");
    assert!(parse.ok());
}

#[test]
fn test_interpolation_with_nested_string() {
    let source = "x = \"a #{h[\"# @return [X]\"]} b\"\n# real\ndef m\nend\n";
    let parse = parse(source);
    let texts: Vec<_> = parse.comments.iter().map(|c| c.text).collect();
    assert_eq!(texts, vec!["# real"]);
    assert_eq!(definition_names(source), vec!["m"]);
}

#[test]
fn test_data_section_is_not_scanned() {
    let source = "def a\nend\n__END__\n# @return [String]\ndef b\nend\n";
    assert_eq!(definition_names(source), vec!["a"]);
    let tokens = tokenize(source);
    assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::DATA_SECTION));
}

#[test]
fn test_lexer_errors_are_reported_not_fatal() {
    let parse = parse("# @return [String]\ndef a\n  'open\nend\n");
    assert!(!parse.ok());
    assert_eq!(definition_names("# @return [String]\ndef a\n  'open\nend\n"), vec!["a"]);
}

proptest! {
    #[test]
    fn prop_tokens_reproduce_source(source in "[ -~\n]{0,120}") {
        let joined: String = tokenize(&source).iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn prop_comments_start_with_hash_or_begin(source in "[ -~\n]{0,120}") {
        for comment in parse(&source).comments {
            prop_assert!(comment.text.starts_with('#') || comment.text.starts_with("=begin"));
        }
    }
}
