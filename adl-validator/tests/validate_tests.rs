//! Integration tests for the single-document engine, `adl_validator::validate`.

use adl_validator::{DetectedFormat, RequestError, ValidationResult, validate};

fn messages(result: &ValidationResult) -> Vec<&str> {
    result
        .syntax_issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect()
}

fn has(list: &[String], wanted: &str) -> bool {
    list.iter().any(|item| item == wanted)
}

// =============================================================================
// ADL documents
// =============================================================================

#[test]
fn test_valid_adl() {
    let adl = "### UseCase: password_reset\n\
        #### Description\n\
        User wants to reset their password.\n\
        \n\
        #### Solution\n\
        Call @reset_password() and go to use case #user_verification.\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(result.detected_format, Some(DetectedFormat::Freeform));
    assert!(result.syntax_issues.is_empty(), "got: {:?}", messages(&result));
    assert!(has(&result.used_tools, "reset_password"), "got: {:?}", result.used_tools);
    assert!(has(&result.references, "user_verification"), "got: {:?}", result.references);
}

#[test]
fn test_unclosed_bracket() {
    let adl = "### UseCase: test\n\
        #### Solution\n\
        This has an unclosed bracket [\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(result.syntax_issues.len(), 1, "got: {:?}", messages(&result));
    assert!(result.syntax_issues[0].message.starts_with("unclosed `[`"));
}

#[test]
fn test_multiple_tools() {
    let adl = "### UseCase: multi_tool\n\
        #### Solution\n\
        Call @tool1() and @tool2() then use @tool3().\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(result.used_tools, vec!["tool1", "tool2", "tool3"]);
}

#[test]
fn test_multiple_references() {
    let adl = "### UseCase: multi_ref\n\
        #### Solution\n\
        Go to #usecase1 and then #usecase2.\n\
        Check https://example.com for details.\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(
        result.references,
        vec!["https://example.com", "usecase1", "usecase2"]
    );
}

#[test]
fn test_unclosed_quote() {
    let adl = "### UseCase: quotes\n\
        #### Solution\n\
        This has an unclosed \"quote\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(messages(&result), vec!["unclosed quote `\"`"]);
}

#[test]
fn test_malformed_document_still_extracts() {
    let adl = "### UseCase: broken\n\
        #### Solution\n\
        Call @extract_tool() and reference #some_usecase.\n\
        [This bracket is never closed\n";

    let result = validate(adl).unwrap();

    assert!(!result.syntax_issues.is_empty());
    assert!(has(&result.used_tools, "extract_tool"));
    assert!(has(&result.references, "some_usecase"));
}

#[test]
fn test_mixed_tabs_and_spaces() {
    let adl = "### UseCase: indentation\n\
        #### Solution\n\
        \tThis line is indented with a tab\n    \
        This line is indented with spaces\n\
        \n\
        ----";

    let result = validate(adl).unwrap();

    assert_eq!(
        messages(&result),
        vec!["mixed tabs and spaces for indentation"]
    );
}

// =============================================================================
// Structural properties
// =============================================================================

#[test]
fn test_balanced_freeform_has_no_issues() {
    let text = "Some text (with [nested] {braces}) and 'quoted' \"words\"\n  indented with spaces only";

    let result = validate(text).unwrap();

    assert_eq!(result.detected_format, Some(DetectedFormat::Freeform));
    assert!(result.syntax_issues.is_empty(), "got: {:?}", messages(&result));
}

#[test]
fn test_mismatched_pair() {
    let result = validate("(]").unwrap();
    assert_eq!(messages(&result), vec!["mismatched `(` with `]` at position 1"]);
}

#[test]
fn test_two_unclosed_openers() {
    let result = validate("((").unwrap();
    assert_eq!(
        messages(&result),
        vec![
            "unclosed `(` starting at position 0",
            "unclosed `(` starting at position 1",
        ]
    );
}

#[test]
fn test_lone_closer() {
    let result = validate(")").unwrap();
    assert_eq!(
        messages(&result),
        vec!["unmatched closing delimiter `)` at position 0"]
    );
}

#[test]
fn test_single_double_quote() {
    let result = validate("she said \"hello and left").unwrap();
    let found = messages(&result);
    assert_eq!(found, vec!["unclosed quote `\"`"]);
    assert!(!found.iter().any(|m| m.contains('\'')));
}

#[test]
fn test_mixed_indentation_reported_once() {
    let mut text = String::from("intro\n");
    for _ in 0..50 {
        text.push_str("\ttabbed line\n  spaced line\n");
    }

    let result = validate(&text).unwrap();

    assert_eq!(
        messages(&result),
        vec!["mixed tabs and spaces for indentation"]
    );
}

#[test]
fn test_issue_lines_are_never_populated() {
    let result = validate("((\n\t)\n  \"").unwrap();
    assert!(!result.syntax_issues.is_empty());
    assert!(result.syntax_issues.iter().all(|issue| issue.line.is_none()));
}

// =============================================================================
// Extraction properties
// =============================================================================

#[test]
fn test_same_tool_in_three_forms_is_deduplicated() {
    let result = validate("tools: Foo\nrun_Foo(x)\n@Foo").unwrap();
    assert_eq!(result.used_tools, vec!["Foo"]);
}

#[test]
fn test_tool_casing_is_preserved() {
    let result = validate("tools: Foo\nrun_foo(x)").unwrap();
    assert_eq!(result.used_tools, vec!["Foo", "foo"]);
}

#[test]
fn test_references_are_sorted_and_deduplicated() {
    let text = "see /docs/guide.md and ref: /docs/guide.md, then https://b.example and https://a.example";

    let result = validate(text).unwrap();

    assert_eq!(
        result.references,
        vec!["/docs/guide.md", "https://a.example", "https://b.example"]
    );
}

// =============================================================================
// Structured documents
// =============================================================================

#[test]
fn test_json_object() {
    let result = validate(r#"{"a": 1}"#).unwrap();
    assert_eq!(result.detected_format, Some(DetectedFormat::Json));
    assert!(result.syntax_issues.is_empty());
}

#[test]
fn test_json_with_unbalanced_characters_in_strings() {
    let result = validate(r#"{"a": "(]", "b": "it's \"odd"}"#).unwrap();
    assert_eq!(result.detected_format, Some(DetectedFormat::Json));
    assert!(result.syntax_issues.is_empty(), "got: {:?}", messages(&result));
}

#[test]
fn test_json_still_extracts() {
    let result = validate(r#"{"steps": ["run_search(q)", "@notify"]}"#).unwrap();
    assert_eq!(result.detected_format, Some(DetectedFormat::Json));
    assert_eq!(result.used_tools, vec!["notify", "search"]);
}

#[test]
fn test_yaml_mapping() {
    let yaml = "name: agent\nsteps:\n  - run_search(q)\n  - uses: fetch\n  - note: \"(\"\n";

    let result = validate(yaml).unwrap();

    assert_eq!(result.detected_format, Some(DetectedFormat::Yaml));
    assert!(result.syntax_issues.is_empty(), "got: {:?}", messages(&result));
    assert_eq!(result.used_tools, vec!["fetch", "search"]);
}

#[test]
fn test_plain_sentence_is_freeform() {
    let result = validate("just one sentence").unwrap();
    assert_eq!(result.detected_format, Some(DetectedFormat::Freeform));
}

// =============================================================================
// Request errors and determinism
// =============================================================================

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(validate(""), Err(RequestError::NoContent));
    assert_eq!(validate(" \n\t \r\n"), Err(RequestError::NoContent));
}

#[test]
fn test_no_content_message() {
    let err = validate("   ").unwrap_err();
    assert_eq!(err.to_string(), "no content provided");
}

#[test]
fn test_validation_is_idempotent() {
    let text = "tools: b, a\n@zeta @alpha\nrun_mid(x) ((\nsee https://x.example /p/q.txt #flow\n\t\"\n  '";

    let first = validate(text).unwrap();
    let second = validate(text).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
