// src/parser/line.rs

//! Single-line parsing: skip rules, quote stripping and escape expansion
//!
//! Only the subset of shell quoting that os-release files use in practice is
//! understood. A value is unquoted when it starts and ends with the same quote
//! character; anything else (including a stray unmatched quote) is passed
//! through literally.

use std::fmt;

/// Escape sequences expanded in every value, applied in this order
const ESCAPES: [(&str, &str); 4] = [("\\\"", "\""), ("\\$", "$"), ("\\\\", "\\"), ("\\`", "`")];

/// A key/value pair extracted from one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub key: &'a str,
    pub value: String,
}

/// Why a line contributed no field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Zero-length line
    Empty,
    /// Line starting with `#`
    Comment,
    /// No `=` anywhere on the line
    MissingSeparator,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Comment => "comment",
            Self::MissingSeparator => "missing '='",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Field(Field<'a>),
    Skipped(SkipReason),
}

impl<'a> LineOutcome<'a> {
    /// The field, if the line produced one
    pub fn into_field(self) -> Option<Field<'a>> {
        match self {
            Self::Field(field) => Some(field),
            Self::Skipped(_) => None,
        }
    }
}

/// Parse one line into a field or a skip
///
/// Skip rules are checked in order: empty line, `#` comment, missing `=`.
/// The line is split at the first `=` only, so values may contain `=`.
pub fn parse_line(line: &str) -> LineOutcome<'_> {
    if line.is_empty() {
        return LineOutcome::Skipped(SkipReason::Empty);
    }
    if line.starts_with('#') {
        return LineOutcome::Skipped(SkipReason::Comment);
    }
    let Some((key, value)) = line.split_once('=') else {
        return LineOutcome::Skipped(SkipReason::MissingSeparator);
    };

    let key = key.trim_matches(' ');
    let value = strip_quotes(value.trim_matches(' '));

    LineOutcome::Field(Field {
        key,
        value: unescape(value),
    })
}

/// Remove one pair of matching surrounding quotes
///
/// Values without any quote character, or whose first and last characters
/// are not the same quote, are returned untouched.
pub fn strip_quotes(value: &str) -> &str {
    if !value.contains(['"', '\'']) {
        return value;
    }

    let (Some(first), Some(last)) = (value.chars().next(), value.chars().next_back()) else {
        return value;
    };
    if first != last || !matches!(first, '"' | '\'') {
        return value;
    }

    let value = value.strip_prefix('\'').unwrap_or(value);
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('\'').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Expand `\"`, `\$`, `\\` and `` \` `` in that fixed order
pub fn unescape(value: &str) -> String {
    let mut expanded = value.to_string();
    for (from, to) in ESCAPES {
        if expanded.contains(from) {
            expanded = expanded.replace(from, to);
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(line: &str) -> String {
        match parse_line(line) {
            LineOutcome::Field(field) => field.value,
            LineOutcome::Skipped(reason) => panic!("line {:?} skipped: {}", line, reason),
        }
    }

    #[test]
    fn test_skip_rules() {
        assert_eq!(parse_line(""), LineOutcome::Skipped(SkipReason::Empty));
        assert_eq!(parse_line("# comment"), LineOutcome::Skipped(SkipReason::Comment));
        assert_eq!(parse_line("#ID=ubuntu"), LineOutcome::Skipped(SkipReason::Comment));
        assert_eq!(parse_line("garbage"), LineOutcome::Skipped(SkipReason::MissingSeparator));
        // Whitespace-only lines are not empty; they fail on the separator
        assert_eq!(parse_line("   "), LineOutcome::Skipped(SkipReason::MissingSeparator));
    }

    #[test]
    fn test_bare_value_trimmed() {
        let outcome = parse_line("  VERSION_ID  =  20.04  ");
        assert_eq!(
            outcome,
            LineOutcome::Field(Field {
                key: "VERSION_ID",
                value: "20.04".to_string()
            })
        );
    }

    #[test]
    fn test_split_at_first_separator() {
        let field = parse_line("HOME_URL=https://example.com/?a=b").into_field().unwrap();
        assert_eq!(field.key, "HOME_URL");
        assert_eq!(field.value, "https://example.com/?a=b");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(value_of("VARIANT="), "");
        assert_eq!(value_of("VARIANT=\"\""), "");
    }

    #[test]
    fn test_quote_stripping() {
        assert_eq!(value_of("ID=\"ubuntu\""), "ubuntu");
        assert_eq!(value_of("ID='ubuntu'"), "ubuntu");
        assert_eq!(value_of("NAME=\"Red Hat Enterprise Linux\""), "Red Hat Enterprise Linux");
    }

    #[test]
    fn test_mismatched_quotes_pass_through() {
        assert_eq!(value_of("ID=\"ubuntu'"), "\"ubuntu'");
        assert_eq!(value_of("ID=\"ubuntu"), "\"ubuntu");
        assert_eq!(value_of("ID=ubuntu\""), "ubuntu\"");
    }

    #[test]
    fn test_single_quoted_value_loses_trailing_double_quote() {
        // Both quote kinds are tried at each end, so an inner `"` next to the
        // closing `'` is consumed as well
        assert_eq!(value_of("NAME='say \"hi\"'"), "say \"hi");
    }

    #[test]
    fn test_nested_quotes_strip_one_of_each() {
        assert_eq!(strip_quotes("'\"x\"'"), "x");
        assert_eq!(strip_quotes("\""), "");
    }

    #[test]
    fn test_tabs_are_not_trimmed() {
        assert_eq!(value_of("ID=\tubuntu"), "\tubuntu");
    }

    #[test]
    fn test_escape_double_quote() {
        assert_eq!(value_of(r#"X=a\"b"#), r#"a"b"#);
    }

    #[test]
    fn test_escape_dollar() {
        assert_eq!(value_of(r"X=\$HOME"), "$HOME");
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(value_of(r"X=a\\b"), r"a\b");
    }

    #[test]
    fn test_escape_backtick() {
        assert_eq!(value_of(r"X=a\`b"), "a`b");
    }

    #[test]
    fn test_escape_order() {
        // Escaped backslash followed by escaped quote inside a quoted value
        assert_eq!(value_of(r#"X="a\\\"b""#), r#"a\"b"#);
        // `\$` is expanded before `\\`, so the dollar keeps one backslash
        assert_eq!(value_of(r"X=\\$"), r"\$");
        // `\\` is expanded before `` \` ``
        assert_eq!(value_of(r"X=\\\`"), r"\`");
    }

    #[test]
    fn test_escapes_apply_without_quotes() {
        assert_eq!(unescape(r#"\"\$\\\`"#), "\"$\\`");
        assert_eq!(unescape("plain"), "plain");
    }
}
