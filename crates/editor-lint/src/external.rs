//! Delegation to full external linters.
//!
//! Some languages warrant a real linter instead of line heuristics (JavaScript is usually handed
//! to ESLint). An [`ExternalLinter`] is plugged into a
//! [`RuleSet`](crate::RuleSet) through [`DelegatedRules`], which guarantees the scan never fails
//! because of it: any error is logged and degraded to "no diagnostics from that linter".

use crate::diagnostics::Diagnostic;
use crate::document::Document;
use crate::rules::LanguageRules;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Errors produced by an [`ExternalLinter`].
#[derive(Debug, thiserror::Error)]
pub enum ExternalLintError {
    /// The linter could not be started or talked to.
    #[error("failed to run {linter}: {source}")]
    Io {
        /// Linter name.
        linter: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The linter exited unsuccessfully without producing a report.
    #[error("{linter} exited with {status}: {stderr}")]
    Failed {
        /// Linter name.
        linter: String,
        /// Exit status, as reported by the OS.
        status: String,
        /// Captured standard error (trimmed).
        stderr: String,
    },
    /// The linter's report could not be parsed.
    #[error("{linter} produced malformed output: {source}")]
    MalformedOutput {
        /// Linter name.
        linter: String,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// A full linter for one language, run once per scanned document.
pub trait ExternalLinter: Send + Sync {
    /// Short name used in logs and errors (e.g. `"eslint"`).
    fn name(&self) -> &str;

    /// Lint the whole document. Returned ranges are document char offsets.
    fn lint(&self, document: &Document) -> Result<Vec<Diagnostic>, ExternalLintError>;
}

/// [`LanguageRules`] backed by an [`ExternalLinter`].
///
/// Replaces the heuristic line rules of a language: registering it for
/// [`LanguageId::JavaScript`](editor_lint_lang::LanguageId::JavaScript) means JavaScript gets the
/// universal rules plus whatever the external linter reports.
#[derive(Debug, Clone)]
pub struct DelegatedRules<L> {
    linter: L,
}

impl<L: ExternalLinter> DelegatedRules<L> {
    /// Wrap `linter`.
    pub fn new(linter: L) -> Self {
        Self { linter }
    }

    /// The wrapped linter.
    pub fn linter(&self) -> &L {
        &self.linter
    }
}

impl<L: ExternalLinter> LanguageRules for DelegatedRules<L> {
    fn name(&self) -> &str {
        self.linter.name()
    }

    fn check_document(&self, document: &Document, out: &mut Vec<Diagnostic>) {
        match self.linter.lint(document) {
            Ok(diagnostics) => {
                let len = document.len_chars();
                out.extend(diagnostics.into_iter().map(|mut diag| {
                    diag.range = diag.range.clamp_to(len);
                    diag
                }));
            }
            Err(err) => {
                tracing::warn!(
                    linter = self.linter.name(),
                    error = %err,
                    "external linter failed; skipping its diagnostics"
                );
            }
        }
    }
}

/// ESLint parser options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsLintParserOptions {
    /// ECMAScript version to parse.
    pub ecma_version: u32,
    /// `"module"` or `"script"`.
    pub source_type: String,
}

/// The configuration handed to ESLint when JavaScript is delegated.
///
/// Serialises to ESLint's (eslintrc-style) JSON config shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsLintOptions {
    /// Parser options.
    pub parser_options: EsLintParserOptions,
    /// Enabled global environments.
    pub env: BTreeMap<String, bool>,
    /// Rule settings, in ESLint's own value format.
    pub rules: BTreeMap<String, Value>,
}

impl Default for EsLintOptions {
    /// ES2019 modules in a browser-like environment, semicolons required, undefined identifiers
    /// allowed (the page provides globals the linter cannot see).
    fn default() -> Self {
        let env = [("browser", true), ("es6", true), ("es2024", true)]
            .into_iter()
            .map(|(name, on)| (name.to_string(), on))
            .collect();

        let rules = BTreeMap::from([
            ("semi".to_string(), serde_json::json!(["error", "always"])),
            ("no-undef".to_string(), Value::from("off")),
        ]);

        Self {
            parser_options: EsLintParserOptions {
                ecma_version: 2019,
                source_type: "module".to_string(),
            },
            env,
            rules,
        }
    }
}

impl EsLintOptions {
    /// The config as a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
