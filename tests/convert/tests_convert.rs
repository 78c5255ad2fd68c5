//! End-to-end conversion tests

use crate::helpers::source_fixtures::*;
use rstest::rstest;
use yard_rbs::{ConvertError, ConvertOptions, Converter, ForeignTagPolicy, convert, convert_batch};

#[test]
fn test_convert_class_with_methods() {
    assert_eq!(convert(CLASS_WITH_METHODS).unwrap(), CLASS_WITH_METHODS_CONVERTED);
}

#[test]
fn test_convert_reorders_and_keeps_descriptions() {
    assert_eq!(
        convert(DESCRIPTIONS_AND_ORDER).unwrap(),
        DESCRIPTIONS_AND_ORDER_CONVERTED
    );
}

#[test]
fn test_convert_leaves_literals_alone() {
    assert_eq!(
        convert(LITERAL_LOOKALIKES).unwrap(),
        LITERAL_LOOKALIKES_CONVERTED
    );
}

#[rstest]
#[case::no_annotations(NO_ANNOTATIONS)]
#[case::foreign_tag(MIXED_FOREIGN_TAG)]
#[case::empty("")]
#[case::marker_without_definition("# @return [String]\n")]
#[case::detached_by_blank_line("# @return [String]\n\ndef foo\nend\n")]
fn test_convert_unchanged(#[case] source: &str) {
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_convert_fails_whole_file_on_parenthesized_type() {
    let err = convert(PARENTHESIZED_TYPE).unwrap_err();
    match &err {
        ConvertError::Definition { name, line, .. } => {
            assert_eq!(name.as_str(), "each");
            assert_eq!(*line, 8);
        }
        other => panic!("expected definition context, got {other:?}"),
    }
    assert_eq!(
        err.root_cause(),
        &ConvertError::UnsupportedType {
            ty: "Proc(Integer)".to_string()
        }
    );
    assert!(err.to_string().starts_with("comments above `each` (line 8)"));
}

#[test]
fn test_convert_top_level_method() {
    let source = "# @param [Integer] n\n# @return [Integer]\ndef double(n) = n * 2\n";
    assert_eq!(
        convert(source).unwrap(),
        "# @rbs n: Integer\n# @rbs return: Integer\ndef double(n) = n * 2\n"
    );
}

#[test]
fn test_convert_keeps_crlf_line_endings() {
    let source = "class A\r\n  # @param [String] a\r\n  # @return [nil]\r\n  def a(a)\r\n  end\r\nend\r\n";
    assert_eq!(
        convert(source).unwrap(),
        "class A\r\n  # @rbs a: String\r\n  # @rbs return: nil\r\n  def a(a)\r\n  end\r\nend\r\n"
    );
}

#[test]
fn test_convert_multibyte_comments_above() {
    let source = "# クラスコメント\nclass Foo\n  # 説明\n  # @return [Boolean]\n  def ok?\n    true\n  end\nend\n";
    assert_eq!(
        convert(source).unwrap(),
        "# クラスコメント\nclass Foo\n  # 説明\n  # @rbs return: bool\n  def ok?\n    true\n  end\nend\n"
    );
}

#[test]
fn test_tag_prefix_option_allows_email_in_prose() {
    let source = "# Mails admin@example.com\n# @return [String]\ndef notify\nend\n";
    assert_eq!(convert(source).unwrap(), source);

    let converter =
        Converter::new(ConvertOptions::default().with_foreign_tags(ForeignTagPolicy::TagPrefix));
    assert_eq!(
        converter.convert(source).unwrap(),
        "# Mails admin@example.com\n# @rbs return: String\ndef notify\nend\n"
    );
}

#[test]
fn test_convert_batch_matches_sequential() {
    let sources = [
        CLASS_WITH_METHODS,
        MIXED_FOREIGN_TAG,
        DESCRIPTIONS_AND_ORDER,
        PARENTHESIZED_TYPE,
    ];
    let batch = convert_batch(&sources);
    let sequential: Vec<_> = sources.iter().map(|s| convert(s)).collect();
    assert_eq!(batch, sequential);
}

#[rstest]
#[case::union("# @return [Array, nil]\ndef a; end\n", "# @rbs return: Array | nil\ndef a; end\n")]
#[case::nested("# @param [Array<Hash>] xs\ndef a(xs); end\n", "# @rbs xs: Array[Hash]\ndef a(xs); end\n")]
#[case::whole("# @param [Hash] h\ndef a(h); end\n", "# @rbs h: Hash[untyped, untyped]\ndef a(h); end\n")]
fn test_convert_fills_only_whole_containers(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(convert(source).unwrap(), expected);
}

#[test]
fn test_convert_keeps_last_return() {
    let source = "# note\n# @return [String]\n# @return [Integer]\ndef a; end\n";
    assert_eq!(
        convert(source).unwrap(),
        "# note\n# @rbs return: Integer\ndef a; end\n"
    );
}

#[test]
fn test_convert_keeps_runs_with_unanchored_tags() {
    let source = "## @return [String]\n# @param [Integer] n\ndef a(n); end\n";
    assert_eq!(convert(source).unwrap(), source);
}
