#![warn(missing_docs)]
//! Editor Lint - a headless diagnostic scanner for source-code editors
//!
//! # Overview
//!
//! `editor-lint` turns a document's text into positioned diagnostics (severity, character
//! range, message) using cheap, line-oriented heuristics: trailing whitespace, tabs, line
//! length, `TODO`/`FIXME` markers, plus a pluggable set of language-specific rules. It does not
//! parse anything and it does not render anything: an editor view supplies the text on every
//! change and draws the returned diagnostics as inline markers.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  DiagnosticScanner (universal rules, loop)  │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  RuleSet (LanguageId → LanguageRules)       │  ← Language dispatch
//! ├─────────────────────────────────────────────┤
//! │  ExternalLinter delegation                  │  ← Full linters (optional)
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope-based line index)           │  ← Text snapshot
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_lint::{DiagnosticScanner, DiagnosticSeverity, RuleSet};
//!
//! // Universal rules only; `editor-lint-rules` provides the default language tables.
//! let scanner = DiagnosticScanner::new(RuleSet::new()).unwrap();
//!
//! let diagnostics = scanner.scan("let x = 1;   \n", "javascript");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
//! assert_eq!(diagnostics[0].code, "trailing-whitespace");
//! ```
//!
//! # Offsets
//!
//! All offsets are Unicode scalar value (`char`) offsets from the start of the document, and
//! lines are split on `\n` only. Use [`Document::char_offset_to_position`] to map a diagnostic
//! back to a line/column.
//!
//! # Module Description
//!
//! - [`document`] - immutable, rope-backed text snapshot
//! - [`diagnostics`] - diagnostic data model
//! - [`rules`] - the [`LanguageRules`] seam and the [`RuleSet`] registry
//! - [`scanner`] - the [`DiagnosticScanner`]
//! - [`config`] - per-rule and per-language overrides
//! - [`external`] - delegation to full external linters

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod external;
pub mod rules;
pub mod scanner;

pub use config::LintConfig;
pub use diagnostics::{Diagnostic, DiagnosticRange, DiagnosticSeverity};
pub use document::{Document, DocumentLine};
pub use editor_lint_lang::{CommentConfig, LanguageId, UnknownLanguage};
pub use external::{DelegatedRules, EsLintOptions, ExternalLintError, ExternalLinter};
pub use rules::{LanguageRules, RuleSet};
pub use scanner::DiagnosticScanner;
