//! Plain regex rules matched against the raw line text.

use editor_lint::{Diagnostic, DiagnosticSeverity, DocumentLine, LanguageRules};
use regex::Regex;

/// A single regex lint rule.
///
/// Every match on a line produces one diagnostic spanning the match (or only a capture group of
/// it, see [`PatternRule::with_capture_group`]).
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    severity: DiagnosticSeverity,
    code: &'static str,
    message: &'static str,
    capture_group: Option<usize>,
}

impl PatternRule {
    pub fn new(
        pattern: &str,
        severity: DiagnosticSeverity,
        code: &'static str,
        message: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            severity,
            code,
            message,
            capture_group: None,
        })
    }

    /// Report only a capture group of each match.
    ///
    /// Example (JSON trailing comma):
    /// - pattern: `(,)\s*[\]}]`
    /// - capture_group: `1` (the comma)
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    /// Returns `true` if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Append one diagnostic per match on `line`.
    pub fn check(&self, line: &DocumentLine<'_>, out: &mut Vec<Diagnostic>) {
        let text: &str = &line.text;
        if let Some(group) = self.capture_group {
            for caps in self.regex.captures_iter(text) {
                let Some(m) = caps.get(group) else {
                    continue;
                };
                out.push(self.diagnostic(line, m.start(), m.end()));
            }
        } else {
            for m in self.regex.find_iter(text) {
                out.push(self.diagnostic(line, m.start(), m.end()));
            }
        }
    }

    fn diagnostic(&self, line: &DocumentLine<'_>, start: usize, end: usize) -> Diagnostic {
        Diagnostic::new(
            line.byte_range(start, end),
            self.severity,
            self.code,
            self.message,
        )
    }
}

/// A named list of [`PatternRule`]s, usable directly as a language's rules.
#[derive(Debug, Clone)]
pub struct PatternRules {
    name: &'static str,
    rules: Vec<PatternRule>,
}

impl PatternRules {
    pub fn new(name: &'static str, rules: Vec<PatternRule>) -> Self {
        Self { name, rules }
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

impl LanguageRules for PatternRules {
    fn name(&self) -> &str {
        self.name
    }

    fn check_line(&self, line: &DocumentLine<'_>, out: &mut Vec<Diagnostic>) {
        for rule in &self.rules {
            rule.check(line, out);
        }
    }
}
