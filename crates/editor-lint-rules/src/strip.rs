//! String / comment stripping helpers used by the line heuristics.
//!
//! These are best-effort, single-line, regex-based rewrites. Known limitations, which are
//! accepted rather than worked around:
//!
//! - a string or comment that spans several lines is not recognised on its continuation lines;
//! - nested quotes of the other kind are handled by stripping double-quoted strings first, so
//!   `'say "hi"'` becomes `''` but an unterminated quote leaves the rest of the line untouched;
//! - comment markers inside a string are only ignored if the string was stripped first;
//! - stripped output no longer has the same offsets as the source line, so rules matching on it
//!   report the whole line.

use editor_lint::CommentConfig;
use regex::Regex;
use std::borrow::Cow;

/// Compiled stripping patterns.
#[derive(Debug, Clone)]
pub struct Strippers {
    double_quoted: Regex,
    single_quoted: Regex,
    triple_double: Regex,
    triple_single: Regex,
    block_comment: Regex,
    line_comment: Regex,
}

impl Strippers {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            double_quoted: Regex::new(r#""(?:\\.|[^"\\])*""#)?,
            single_quoted: Regex::new(r"'(?:\\.|[^'\\])*'")?,
            triple_double: Regex::new(r#"""".*?""""#)?,
            triple_single: Regex::new(r"'''.*?'''")?,
            block_comment: Regex::new(r"/\*.*?\*/")?,
            line_comment: Regex::new(r"//.*$")?,
        })
    }

    /// Empty the contents of single- and double-quoted string literals, keeping the quotes.
    pub fn strip_string_literals<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.double_quoted.replace_all(line, r#""""#) {
            Cow::Borrowed(s) => self.single_quoted.replace_all(s, "''"),
            Cow::Owned(s) => Cow::Owned(self.single_quoted.replace_all(&s, "''").into_owned()),
        }
    }

    /// Python flavour: triple-quoted strings first, then ordinary string literals.
    pub fn strip_python_strings<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let triple = self.triple_double.replace_all(line, r#""""""""#);
        let triple = match triple {
            Cow::Borrowed(s) => self.triple_single.replace_all(s, "''''''"),
            Cow::Owned(s) => Cow::Owned(self.triple_single.replace_all(&s, "''''''").into_owned()),
        };
        match triple {
            Cow::Borrowed(s) => self.strip_string_literals(s),
            Cow::Owned(s) => Cow::Owned(self.strip_string_literals(&s).into_owned()),
        }
    }

    /// Remove `/* ... */` comments closed on the same line, then a trailing `// ...` comment.
    pub fn strip_inline_comments<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.block_comment.replace_all(line, "") {
            Cow::Borrowed(s) => self.line_comment.replace(s, ""),
            Cow::Owned(s) => Cow::Owned(self.line_comment.replace(&s, "").into_owned()),
        }
    }
}

/// Returns `true` if `line` is entirely a comment according to `comments`.
pub fn is_full_line_comment(line: &str, comments: &CommentConfig) -> bool {
    comments.starts_comment(line)
}

/// The missing-statement-terminator heuristic.
///
/// `true` when the trimmed text is non-empty and ends in an ASCII alphanumeric character or
/// `_` (so it cannot end in `;`, `{`, `}`, `,`, an operator, ...). This over-fires on
/// continuation lines, template literals and constructs that legitimately need no terminator.
pub fn ends_without_terminator(text: &str) -> bool {
    text.trim()
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_lint::LanguageId;

    fn strippers() -> Strippers {
        Strippers::new().unwrap()
    }

    #[test]
    fn test_strip_string_literals() {
        let s = strippers();
        assert_eq!(s.strip_string_literals(r#"a = "x; y" + 'z'"#), r#"a = "" + ''"#);
        assert_eq!(s.strip_string_literals(r#"p("esc \" quote")"#), r#"p("")"#);
        assert_eq!(s.strip_string_literals(r#"'say "hi"'"#), "''");
        assert!(matches!(s.strip_string_literals("no strings"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unterminated_quote_is_left_alone() {
        let s = strippers();
        assert_eq!(s.strip_string_literals(r#"x = "open"#), r#"x = "open"#);
    }

    #[test]
    fn test_strip_python_strings() {
        let s = strippers();
        assert_eq!(
            s.strip_python_strings(r#"x = """print(1)""" + 'print(2)'"#),
            r#"x = """""" + ''"#
        );
        assert_eq!(s.strip_python_strings("'''a''' b"), "'''''' b");
    }

    #[test]
    fn test_strip_inline_comments() {
        let s = strippers();
        assert_eq!(s.strip_inline_comments("int x /* c */ = 1; // tail"), "int x  = 1; ");
        assert_eq!(s.strip_inline_comments("/* only */"), "");
        // A URL inside an unstripped string looks like a comment.
        assert_eq!(s.strip_inline_comments(r#"u = "http://x""#), r#"u = "http:"#);
    }

    #[test]
    fn test_is_full_line_comment() {
        let c = LanguageId::Java.comment_config();
        assert!(is_full_line_comment("  // x", &c));
        assert!(is_full_line_comment("/* x", &c));
        assert!(!is_full_line_comment("x(); // y", &c));
        assert!(is_full_line_comment("# x", &LanguageId::Python.comment_config()));
    }

    #[test]
    fn test_ends_without_terminator() {
        assert!(ends_without_terminator("let x = 1"));
        assert!(ends_without_terminator("  foo_  "));
        assert!(ends_without_terminator("return value_2"));
        assert!(!ends_without_terminator("let x = 1;"));
        assert!(!ends_without_terminator("if (x) {"));
        assert!(!ends_without_terminator("}"));
        assert!(!ends_without_terminator("a +"));
        assert!(!ends_without_terminator("   "));
        assert!(!ends_without_terminator("naïve é"));
    }
}
