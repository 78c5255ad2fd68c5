//! Property tests for the conversion pipeline

use proptest::prelude::*;
use yard_rbs::convert;

/// A simple YARD type
fn yard_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("String".to_string()),
        Just("Integer".to_string()),
        Just("Boolean".to_string()),
        Just("NilClass".to_string()),
        Just("Array".to_string()),
        Just("Hash".to_string()),
        Just("Array<String>".to_string()),
        Just("String, nil".to_string()),
    ]
}

/// One recognized tag line
fn tag_line() -> impl Strategy<Value = String> {
    prop_oneof![
        yard_type().prop_map(|ty| format!("# @return [{ty}]")),
        (yard_type(), "[a-z]{1,8}").prop_map(|(ty, name)| format!("# @param [{ty}] {name}")),
        (yard_type(), "[a-z]{1,8}", "[a-z ]{1,12}")
            .prop_map(|(ty, name, desc)| format!("# @param {name} [{ty}] {desc}")),
    ]
}

/// A method preceded by a run of tag lines and plain prose
fn documented_method() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop_oneof![tag_line(), "# [a-z ]{0,16}"], 1..5),
        "m_[a-z]{1,6}",
        0usize..3,
    )
        .prop_map(|(lines, name, depth)| {
            let indent = "  ".repeat(depth);
            let mut source = String::new();
            for line in lines {
                source.push_str(&indent);
                source.push_str(&line);
                source.push('\n');
            }
            source.push_str(&format!("{indent}def {name}\n{indent}end\n"));
            source
        })
}

proptest! {
    #[test]
    fn prop_text_without_marker_is_unchanged(source in "[^@]{0,200}") {
        prop_assert_eq!(convert(&source).unwrap(), source);
    }

    #[test]
    fn prop_conversion_is_idempotent(methods in prop::collection::vec(documented_method(), 1..4)) {
        let source = methods.join("\n");
        let once = convert(&source).unwrap();
        let twice = convert(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_only_comment_lines_change(methods in prop::collection::vec(documented_method(), 1..4)) {
        let source = methods.join("\n");
        let converted = convert(&source).unwrap();
        let code = |text: &str| -> Vec<String> {
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .map(str::to_string)
                .collect()
        };
        prop_assert_eq!(code(&source), code(&converted));
    }
}
