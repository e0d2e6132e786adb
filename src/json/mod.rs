//! JSON prettification
//!
//! Parses arbitrary JSON text and re-serializes it with 2-space indentation.
//! Object key order survives the round trip; the parser's diagnostic is
//! returned verbatim on failure.

use serde_json::Value;

use crate::error::Result;

/// Re-serialize JSON text with 2-space indentation
///
/// Key order is preserved as encountered in the input. Empty input is a
/// parse failure like any other malformed document.
///
/// # Example
///
/// ```rust
/// use devkit_core::json::prettify;
///
/// let pretty = prettify(r#"{"name":"test","value":123}"#).unwrap();
/// assert_eq!(pretty, "{\n  \"name\": \"test\",\n  \"value\": 123\n}");
/// ```
pub fn prettify(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render text as a JSON string literal
///
/// Wraps the input in quotes and escapes backslashes, quotes, and control
/// characters, producing a literal that can be pasted into source code.
pub fn js_string_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prettify_object() {
        let pretty = prettify(r#"{"name":"test","value":123}"#).unwrap();
        assert_eq!(pretty, "{\n  \"name\": \"test\",\n  \"value\": 123\n}");
    }

    #[test]
    fn test_prettify_preserves_key_order() {
        let pretty = prettify(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let zeta = pretty.find("zeta").unwrap();
        let alpha = pretty.find("alpha").unwrap();
        let mid = pretty.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_prettify_nested() {
        let pretty = prettify(r#"{"items":[1,2,{"deep":true}],"done":null}"#).unwrap();
        assert_eq!(
            pretty,
            "{\n  \"items\": [\n    1,\n    2,\n    {\n      \"deep\": true\n    }\n  ],\n  \"done\": null\n}"
        );
    }

    #[test]
    fn test_prettify_rejects_malformed() {
        let err = prettify("{invalid}").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("JSON"));

        assert!(prettify("").unwrap_err().is_parse_error());
        assert!(prettify("{\"open\": ").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_prettify_scalars() {
        assert_eq!(prettify("42").unwrap(), "42");
        assert_eq!(prettify("\"plain\"").unwrap(), "\"plain\"");
        assert_eq!(prettify("[]").unwrap(), "[]");
    }

    #[test]
    fn test_js_string_literal_escapes() {
        assert_eq!(js_string_literal("plain"), "\"plain\"");
        assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(js_string_literal("line1\nline2\ttabbed"), "\"line1\\nline2\\ttabbed\"");
        assert_eq!(js_string_literal("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(js_string_literal(""), "\"\"");
    }
}
