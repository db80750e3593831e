//! Unit tests for string-level decoding and format detection.

use std::path::Path;

use rstest::rstest;
use serde_json::json;

use super::decode_str;
use crate::StrataError;
use crate::decode::Format;

fn probe_path() -> &'static Path {
    Path::new("probe.conf")
}

#[test]
fn explicit_and_detected_json_agree() {
    let text = r#"{"var1":"value1","var2":"value2"}"#;
    let explicit = decode_str(text, probe_path(), Some(Format::Json)).expect("valid JSON");
    let detected = decode_str(text, probe_path(), None).expect("detectable JSON");
    assert_eq!(explicit, detected);
    assert_eq!(explicit.get("var1"), Some(&json!("value1")));
}

#[test]
fn detection_falls_back_to_sectioned() {
    let text = "[sec1]\nvar1=value1\n";
    let detected = decode_str(text, probe_path(), None).expect("detectable sectioned text");
    let explicit =
        decode_str(text, probe_path(), Some(Format::Sectioned)).expect("valid sectioned text");
    assert_eq!(detected, explicit);
}

#[test]
fn requested_decoder_failure_carries_diagnostics() {
    let err = decode_str("[sec]\nbroken line\n", probe_path(), Some(Format::Sectioned))
        .expect_err("malformed sectioned text");
    let StrataError::Decode {
        path,
        message,
        parser_msg,
        line,
    } = err
    else {
        panic!("expected Decode, got another variant");
    };
    assert_eq!(path, probe_path());
    assert!(message.contains("sectioned"));
    assert_eq!(line, Some(2));
    let parser_msg = parser_msg.expect("parser sub-message");
    assert!(parser_msg.ends_with(": line 2"), "got '{parser_msg}'");
}

#[rstest]
#[case("neither json nor sectioned")]
#[case("{\"unterminated\": ")]
fn exhausted_detection_reports_path_only(#[case] text: &str) {
    let err = decode_str(text, probe_path(), None).expect_err("undetectable text");
    let StrataError::Decode {
        parser_msg, line, ..
    } = err
    else {
        panic!("expected Decode, got another variant");
    };
    // per-decoder diagnostics are dropped once every decoder has failed
    assert_eq!(parser_msg, None);
    assert_eq!(line, None);
}

#[test]
fn json_wins_over_sectioned_for_ambiguous_content() {
    // valid JSON that a permissive line parser might also accept
    let text = "{}";
    let decoded = decode_str(text, probe_path(), None).expect("empty object");
    assert!(decoded.is_empty());
}
