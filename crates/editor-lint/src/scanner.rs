//! The diagnostic scanner.
//!
//! [`DiagnosticScanner`] walks a [`Document`] line by line, applies the universal rules, then
//! dispatches to the language-specific rules registered in its [`RuleSet`]. After the last line
//! it runs the document-level hooks and the file-level mixed-indentation rule.
//!
//! A scan is a pure function of `(text, language, rule set, config)`: no state survives between
//! scans, and the same input always yields the same diagnostics in the same order.

use crate::config::LintConfig;
use crate::diagnostics::{Diagnostic, DiagnosticRange};
use crate::document::{Document, DocumentLine};
use crate::rules::RuleSet;
use editor_lint_lang::LanguageId;
use regex::Regex;
use std::sync::Arc;

/// Rule id: whitespace at the end of a line.
pub const TRAILING_WHITESPACE: &str = "trailing-whitespace";
/// Rule id: a tab character anywhere in a line.
pub const TAB_CHARACTER: &str = "tab-character";
/// Rule id: line longer than the language threshold.
pub const LINE_TOO_LONG: &str = "line-too-long";
/// Rule id: `TODO` / `FIXME` marker.
pub const TODO_MARKER: &str = "todo-marker";
/// Rule id: some lines indented with tabs, others with spaces.
pub const MIXED_INDENTATION_FILE: &str = "mixed-indentation-file";

/// The universal (language-independent) line rules.
#[derive(Debug, Clone)]
struct UniversalRules {
    trailing_whitespace: Regex,
    todo_marker: Regex,
}

impl UniversalRules {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            trailing_whitespace: Regex::new(r"\s+$")?,
            todo_marker: Regex::new(r"\b(?:TODO|FIXME)\b")?,
        })
    }

    fn check_line(
        &self,
        line: &DocumentLine<'_>,
        max_line_length: usize,
        indentation: &mut IndentationStyle,
        out: &mut Vec<Diagnostic>,
    ) {
        let text: &str = &line.text;
        let (from, to) = (line.start, line.end());

        if self.trailing_whitespace.is_match(text) {
            out.push(Diagnostic::warning(
                DiagnosticRange::last_char(from, to),
                TRAILING_WHITESPACE,
                "trailing whitespace",
            ));
        }

        indentation.observe(text);

        if text.contains('\t') {
            out.push(Diagnostic::warning(
                line.range(),
                TAB_CHARACTER,
                "tab character",
            ));
        }

        if to - from > max_line_length {
            out.push(Diagnostic::info(
                DiagnosticRange::new(from + max_line_length, to),
                LINE_TOO_LONG,
                format!("line exceeds {max_line_length} characters"),
            ));
        }

        if self.todo_marker.is_match(text) {
            out.push(Diagnostic::info(
                line.range(),
                TODO_MARKER,
                "TODO/FIXME comment",
            ));
        }
    }
}

/// File-level indentation flags.
#[derive(Debug, Clone, Copy, Default)]
struct IndentationStyle {
    saw_tabs: bool,
    saw_spaces: bool,
}

impl IndentationStyle {
    fn observe(&mut self, line: &str) {
        self.saw_tabs |= line.starts_with('\t');
        self.saw_spaces |= line.starts_with(' ');
    }

    fn is_mixed(self) -> bool {
        self.saw_tabs && self.saw_spaces
    }
}

/// Turns document text into positioned diagnostics.
///
/// The rule set is shared (`Arc`) and never mutated by the scanner, so one scanner (or many
/// scanners over the same rule set) can serve every scan request of an editor session.
#[derive(Debug, Clone)]
pub struct DiagnosticScanner {
    rules: Arc<RuleSet>,
    config: LintConfig,
    universal: UniversalRules,
}

impl DiagnosticScanner {
    /// Create a scanner over `rules` with the default configuration.
    pub fn new(rules: impl Into<Arc<RuleSet>>) -> Result<Self, regex::Error> {
        Ok(Self {
            rules: rules.into(),
            config: LintConfig::default(),
            universal: UniversalRules::new()?,
        })
    }

    /// Replace the configuration (builder pattern).
    pub fn with_config(mut self, config: LintConfig) -> Self {
        self.config = config;
        self
    }

    /// The rule set this scanner dispatches to.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The active configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Scan `text` for the language named by `language_tag`.
    ///
    /// Tags outside the known set are accepted and get the universal rules only.
    pub fn scan(&self, text: &str, language_tag: &str) -> Vec<Diagnostic> {
        let document = Document::from_text(text);
        self.scan_document(&document, LanguageId::from_tag(language_tag))
    }

    /// Scan a document snapshot.
    pub fn scan_document(&self, document: &Document, language: Option<LanguageId>) -> Vec<Diagnostic> {
        let language_rules = language.and_then(|lang| self.rules.get(lang));
        let max_line_length = self.config.line_length_limit(language);

        let mut diagnostics = Vec::new();
        let mut indentation = IndentationStyle::default();

        for line in document.lines() {
            self.universal
                .check_line(&line, max_line_length, &mut indentation, &mut diagnostics);
            if let Some(rules) = language_rules {
                rules.check_line(&line, &mut diagnostics);
            }
        }

        if let Some(rules) = language_rules {
            rules.check_document(document, &mut diagnostics);
        }

        if indentation.is_mixed() {
            diagnostics.push(Diagnostic::warning(
                DiagnosticRange::new(0, document.len_chars().min(1)),
                MIXED_INDENTATION_FILE,
                "mixed indentation detected in file.",
            ));
        }

        let diagnostics = self.config.apply(diagnostics);

        tracing::debug!(
            language = language.map_or("none", LanguageId::as_str),
            rules = language_rules.map_or("universal", |rules| rules.name()),
            lines = document.line_count(),
            diagnostics = diagnostics.len(),
            "scanned document"
        );

        diagnostics
    }
}
