//! Idempotent HTML escaping.

use std::sync::OnceLock;

use regex::Regex;

use crate::value::{value_to_string, Value};

static DOUBLE_ESCAPE: OnceLock<Option<Regex>> = OnceLock::new();

fn double_escape_pattern() -> Option<&'static Regex> {
    DOUBLE_ESCAPE
        .get_or_init(|| Regex::new(r"(?i-u)&amp;([a-z]+|(#\d+)|(#x[\da-f]+));").ok())
        .as_ref()
}

/// Escape a value for use inside HTML text or a quoted attribute.
///
/// Quotes, ampersands and angle brackets are encoded, then any entity that
/// ended up encoded twice is collapsed back, so escaping an already escaped
/// string leaves it unchanged.
pub fn escape_once(value: &Value) -> String {
    escape_str_once(&value_to_string(value))
}

/// [`escape_once`] for plain strings.
pub fn escape_str_once(value: &str) -> String {
    let encoded = html_escape::encode_quoted_attribute(value);
    fix_double_escape(&encoded)
}

/// Collapse `&amp;name;`, `&amp;#123;` and `&amp;#x1f;` back to single
/// escaped entity references.
pub fn fix_double_escape(escaped: &str) -> String {
    match double_escape_pattern() {
        Some(re) => re.replace_all(escaped, "&${1};").into_owned(),
        None => escaped.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::json;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_str_once(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_keeps_existing_entities() {
        assert_eq!(escape_str_once("&lt;b&gt;"), "&lt;b&gt;");
        assert_eq!(escape_str_once("&#160;"), "&#160;");
        assert_eq!(escape_str_once("&#xA0;"), "&#xA0;");
        assert_eq!(escape_str_once("fish &amp; chips"), "fish &amp; chips");
    }

    #[test]
    fn test_escape_lone_ampersand() {
        assert_eq!(escape_str_once("a & b"), "a &amp; b");
        assert_eq!(escape_str_once("&;"), "&amp;;");
        assert_eq!(escape_str_once("&#;"), "&amp;#;");
    }

    #[test]
    fn test_escape_non_string_values() {
        assert_eq!(escape_once(&json!(12)), "12");
        assert_eq!(escape_once(&json!(true)), "1");
        assert_eq!(escape_once(&Value::Null), "");
    }

    #[test]
    fn test_fix_double_escape() {
        assert_eq!(
            fix_double_escape("&amp;quot;&amp;#039;&amp;#x27;&amp;"),
            "&quot;&#039;&#x27;&amp;"
        );
    }

    #[test]
    fn test_escape_is_idempotent() {
        for input in ["<p>", "&amp;amp;", "\"'", "&#12a;", "plain", "&AMP;"] {
            let once = escape_str_once(input);
            assert_eq!(escape_str_once(&once), once, "input: {input}");
        }
    }
}
