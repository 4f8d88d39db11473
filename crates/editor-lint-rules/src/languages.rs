//! Language-specific rule tables.

use crate::pattern::{PatternRule, PatternRules};
use crate::strip::{Strippers, ends_without_terminator, is_full_line_comment};
use crate::{
    CONSOLE_LOG, CSS_IMPORTANT, DEBUG_OUTPUT, DEBUG_PRINT, FMT_PRINT, INLINE_STYLE,
    JSON_TRAILING_COMMA, MISSING_SEMICOLON, MIXED_INDENTATION, PRINTLN, SQL_KEYWORD_CASE,
};
use editor_lint::{
    CommentConfig, Diagnostic, DiagnosticRange, DiagnosticSeverity, DocumentLine, LanguageId,
    LanguageRules,
};
use regex::Regex;

fn missing_semicolon(line: &DocumentLine<'_>) -> Diagnostic {
    Diagnostic::info(
        DiagnosticRange::last_char(line.start, line.end()),
        MISSING_SEMICOLON,
        "possible missing semicolon",
    )
}

/// Python: debug `print(` calls outside strings/comments, mixed tab/space indentation.
#[derive(Debug, Clone)]
pub struct PythonRules {
    strippers: Strippers,
    comments: CommentConfig,
    print_call: Regex,
}

impl PythonRules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            strippers: Strippers::new()?,
            comments: LanguageId::Python.comment_config(),
            print_call: Regex::new(r"\bprint\s*\(")?,
        })
    }
}

impl LanguageRules for PythonRules {
    fn name(&self) -> &str {
        "python"
    }

    fn check_line(&self, line: &DocumentLine<'_>, out: &mut Vec<Diagnostic>) {
        let text: &str = &line.text;

        if !is_full_line_comment(text, &self.comments) {
            let code = self.strippers.strip_python_strings(text);
            if self.print_call.is_match(&code) {
                out.push(Diagnostic::info(
                    line.range(),
                    DEBUG_PRINT,
                    "possible debug code",
                ));
            }
        }

        let indent_len = text.len() - text.trim_start_matches([' ', '\t']).len();
        let indent = &text[..indent_len];
        if indent.contains(' ') && indent.contains('\t') {
            out.push(Diagnostic::error(
                line.byte_range(0, indent_len),
                MIXED_INDENTATION,
                "mixed indentation",
            ));
        }
    }
}

/// JavaScript heuristics, used when no external linter is configured.
#[derive(Debug, Clone)]
pub struct JavaScriptRules {
    console: PatternRule,
}

impl JavaScriptRules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            console: PatternRule::new(
                r"\bconsole\.(?:log|debug)\b",
                DiagnosticSeverity::Warning,
                CONSOLE_LOG,
                "console.log statement",
            )?,
        })
    }
}

impl LanguageRules for JavaScriptRules {
    fn name(&self) -> &str {
        "javascript"
    }

    fn check_line(&self, line: &DocumentLine<'_>, out: &mut Vec<Diagnostic>) {
        self.console.check(line, out);
        if ends_without_terminator(&line.text) {
            out.push(missing_semicolon(line));
        }
    }
}

/// C, C++, Java and PHP: missing terminators and `printf(` on the line with strings and
/// comments stripped.
#[derive(Debug, Clone)]
pub struct CFamilyRules {
    strippers: Strippers,
    comments: CommentConfig,
    printf_call: Regex,
}

impl CFamilyRules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            strippers: Strippers::new()?,
            comments: LanguageId::Cpp.comment_config(),
            printf_call: Regex::new(r"\bprintf\s*\(")?,
        })
    }
}

impl LanguageRules for CFamilyRules {
    fn name(&self) -> &str {
        "c-family"
    }

    fn check_line(&self, line: &DocumentLine<'_>, out: &mut Vec<Diagnostic>) {
        let text: &str = &line.text;
        if is_full_line_comment(text, &self.comments) {
            return;
        }

        let without_strings = self.strippers.strip_string_literals(text);
        let code = self.strippers.strip_inline_comments(&without_strings);
        if code.trim().is_empty() {
            return;
        }

        if ends_without_terminator(&code) {
            out.push(missing_semicolon(line));
        }
        if self.printf_call.is_match(&code) {
            out.push(Diagnostic::info(line.range(), DEBUG_OUTPUT, "debug output?"));
        }
    }
}

pub fn go_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "go",
        vec![PatternRule::new(
            r"fmt\.Print",
            DiagnosticSeverity::Info,
            FMT_PRINT,
            "fmt.Print debug output",
        )?],
    ))
}

pub fn rust_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "rust",
        vec![PatternRule::new(
            r"println!",
            DiagnosticSeverity::Info,
            PRINTLN,
            "println! debug output",
        )?],
    ))
}

pub fn sql_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "sql",
        vec![PatternRule::new(
            r"\b(?:select|from|where|join)\b",
            DiagnosticSeverity::Info,
            SQL_KEYWORD_CASE,
            "keywords should be uppercase",
        )?],
    ))
}

pub fn html_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "html",
        vec![PatternRule::new(
            r"\bstyle\s*=",
            DiagnosticSeverity::Warning,
            INLINE_STYLE,
            "inline style attribute",
        )?],
    ))
}

pub fn css_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "css",
        vec![PatternRule::new(
            r"!important",
            DiagnosticSeverity::Warning,
            CSS_IMPORTANT,
            "avoid !important",
        )?],
    ))
}

pub fn json_rules() -> Result<PatternRules, regex::Error> {
    Ok(PatternRules::new(
        "json",
        vec![
            PatternRule::new(
                r"(,)\s*[\]}]",
                DiagnosticSeverity::Error,
                JSON_TRAILING_COMMA,
                "trailing comma is invalid JSON",
            )?
            .with_capture_group(1),
        ],
    ))
}
