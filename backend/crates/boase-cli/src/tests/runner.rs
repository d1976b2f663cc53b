use crate::runner::render;

use serde_json::json;

#[test]
fn given_value_when_rendered_compact_then_single_line() {
    let output = render(&json!({ "signed_out": true }), false).unwrap();

    assert_eq!(output, r#"{"signed_out":true}"#);
}

#[test]
fn given_value_when_rendered_pretty_then_indented() {
    let output = render(&json!({ "signed_out": true }), true).unwrap();

    assert_eq!(output, "{\n  \"signed_out\": true\n}");
}
