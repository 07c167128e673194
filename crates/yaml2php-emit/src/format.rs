//! Scalar and string formatting rules for PHP literals.

use once_cell::sync::Lazy;
use regex::Regex;
use yaml2php_ast::Scalar;

/// Full-string match for the raw-PHP escape hatch, e.g. `%PHP{MY_CONST}`.
static PHP_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^%PHP\{(.*)\}$").expect("valid regex"));

/// Render a scalar as a PHP literal.
pub(crate) fn format_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(s) => format_string(s),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Null => "null".to_string(),
    }
}

/// Render a string scalar as a quoted PHP string, honoring the `%PHP{}`
/// escape hatch.
///
/// Single quotes are preferred, with internal single quotes
/// backslash-escaped; double quotes are used only when the content has a
/// `"` and no `'` (PHP single-quoted strings do not interpolate, so they
/// are the safer default).
fn format_string(value: &str) -> String {
    let content = strip_outer_quotes(value);

    if let Some(captures) = PHP_EXPR.captures(content) {
        // Raw PHP expression: emitted verbatim, unquoted
        return captures[1].to_string();
    }

    if !content.contains('\'') && content.contains('"') {
        format!("\"{}\"", content.replace('"', "\\\""))
    } else {
        format!("'{}'", content.replace('\'', "\\'"))
    }
}

/// Strip exactly one layer of matching outer quote characters, so quoted
/// and unquoted YAML scalars converge to the same inner content.
fn strip_outer_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'\'' || bytes[0] == b'"')
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_single_quoted() {
        assert_eq!(format_string("hello"), "'hello'");
    }

    #[test]
    fn test_single_quote_escaped() {
        assert_eq!(format_string("it's"), "'it\\'s'");
    }

    #[test]
    fn test_leading_single_quote_escaped() {
        // An apostrophe at index 0 must not change the quoting choice
        assert_eq!(format_string("'til dawn "), "'\\'til dawn '");
    }

    #[test]
    fn test_double_quotes_used_when_content_has_only_double() {
        assert_eq!(format_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_both_quote_kinds_prefer_single() {
        assert_eq!(format_string("it's \"fine\""), "'it\\'s \"fine\"'");
    }

    #[test]
    fn test_outer_quotes_stripped_once() {
        assert_eq!(format_string("'quoted'"), "'quoted'");
        assert_eq!(format_string("\"quoted\""), "'quoted'");
        // Only one layer comes off
        assert_eq!(format_string("''x''"), "'\\'x\\''");
    }

    #[test]
    fn test_mismatched_outer_quotes_not_stripped() {
        assert_eq!(format_string("'a\""), "'\\'a\"'");
    }

    #[test]
    fn test_php_escape_hatch() {
        assert_eq!(format_string("%PHP{MY_CONST}"), "MY_CONST");
        assert_eq!(format_string("%PHP{Foo::BAR}"), "Foo::BAR");
    }

    #[test]
    fn test_php_escape_after_quote_stripping() {
        assert_eq!(format_string("'%PHP{MY_CONST}'"), "MY_CONST");
    }

    #[test]
    fn test_php_escape_requires_full_match() {
        assert_eq!(format_string("x %PHP{MY_CONST}"), "'x %PHP{MY_CONST}'");
        assert_eq!(format_string("%php{lower}"), "'%php{lower}'");
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(format_scalar(&Scalar::Bool(true)), "true");
        assert_eq!(format_scalar(&Scalar::Bool(false)), "false");
        assert_eq!(format_scalar(&Scalar::Int(3)), "3");
        assert_eq!(format_scalar(&Scalar::Float(3.5)), "3.5");
        assert_eq!(format_scalar(&Scalar::Null), "null");
    }
}
