//! Scan configuration.
//!
//! [`LintConfig::default()`] reproduces the built-in behaviour exactly; everything here is an
//! opt-in override (usually loaded from a `.editor-lint.toml` file by the CLI).

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use editor_lint_lang::LanguageId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Configuration applied by the scanner to every produced diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Rule ids to drop entirely.
    pub disabled_rules: BTreeSet<String>,

    /// Severity overrides by rule id.
    pub severity_overrides: BTreeMap<String, DiagnosticSeverity>,

    /// Treat warnings as errors (applied after overrides).
    pub strict: bool,

    /// Line-length thresholds by language.
    pub max_line_length: BTreeMap<LanguageId, usize>,

    /// Line-length threshold for languages without an entry in `max_line_length`, including
    /// unknown languages. Falls back to the per-language built-in threshold.
    pub default_max_line_length: Option<usize>,
}

impl LintConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict mode.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Disable a rule.
    pub fn disable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_id.into());
        self
    }

    /// Override severity for a rule.
    pub fn override_severity(mut self, rule_id: impl Into<String>, severity: DiagnosticSeverity) -> Self {
        self.severity_overrides.insert(rule_id.into(), severity);
        self
    }

    /// Override the line-length threshold for a language.
    pub fn with_max_line_length(mut self, language: LanguageId, max: usize) -> Self {
        self.max_line_length.insert(language, max);
        self
    }

    /// Check if a rule is disabled.
    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.contains(rule_id)
    }

    /// Get the effective severity for a rule.
    pub fn effective_severity(&self, rule_id: &str, default: DiagnosticSeverity) -> DiagnosticSeverity {
        let severity = self
            .severity_overrides
            .get(rule_id)
            .copied()
            .unwrap_or(default);

        if self.strict && severity == DiagnosticSeverity::Warning {
            DiagnosticSeverity::Error
        } else {
            severity
        }
    }

    /// Line-length threshold for `language`.
    pub fn line_length_limit(&self, language: Option<LanguageId>) -> usize {
        language
            .and_then(|lang| self.max_line_length.get(&lang).copied())
            .or(self.default_max_line_length)
            .unwrap_or_else(|| editor_lint_lang::max_line_length(language))
    }

    /// Drop disabled diagnostics and apply severity overrides, preserving order.
    pub fn apply(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        if *self == Self::default() {
            return diagnostics;
        }

        diagnostics
            .into_iter()
            .filter(|diag| !self.is_rule_disabled(&diag.code))
            .map(|mut diag| {
                diag.severity = self.effective_severity(&diag.code, diag.severity);
                diag
            })
            .collect()
    }
}
