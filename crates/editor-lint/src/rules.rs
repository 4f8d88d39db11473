//! The language-rule seam and the language-keyed rule registry.
//!
//! A [`RuleSet`] maps each [`LanguageId`] to a [`LanguageRules`] implementation. It is built
//! once (see `editor-lint-rules` for the default tables), wrapped in an `Arc`, and handed to a
//! [`DiagnosticScanner`](crate::DiagnosticScanner). Languages without an entry only get the
//! universal rules.

use crate::diagnostics::Diagnostic;
use crate::document::{Document, DocumentLine};
use editor_lint_lang::LanguageId;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Language-specific checks run by the scanner.
///
/// Implementations must be pure: the same input always appends the same diagnostics. Ranges
/// are document char offsets and must stay within the line (for [`check_line`]) or the document
/// (for [`check_document`]).
///
/// [`check_line`]: LanguageRules::check_line
/// [`check_document`]: LanguageRules::check_document
pub trait LanguageRules: Send + Sync {
    /// Short name used in logs (e.g. `"python"`, `"eslint"`).
    fn name(&self) -> &str;

    /// Check a single line. Called once per line, in document order.
    fn check_line(&self, _line: &DocumentLine<'_>, _out: &mut Vec<Diagnostic>) {}

    /// Check the whole document. Called once, after every line has been checked.
    fn check_document(&self, _document: &Document, _out: &mut Vec<Diagnostic>) {}
}

/// Language-keyed registry of [`LanguageRules`].
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<LanguageId, Arc<dyn LanguageRules>>,
}

impl RuleSet {
    /// Create an empty rule set (universal rules only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the rules for `language`.
    pub fn register(&mut self, language: LanguageId, rules: impl LanguageRules + 'static) {
        self.rules.insert(language, Arc::new(rules));
    }

    /// Register shared rules for `language` (one implementation may serve several languages).
    pub fn register_shared(&mut self, language: LanguageId, rules: Arc<dyn LanguageRules>) {
        self.rules.insert(language, rules);
    }

    /// Register rules (builder pattern).
    pub fn with(mut self, language: LanguageId, rules: impl LanguageRules + 'static) -> Self {
        self.register(language, rules);
        self
    }

    /// Remove the rules for `language`, returning them if present.
    pub fn remove(&mut self, language: LanguageId) -> Option<Arc<dyn LanguageRules>> {
        self.rules.remove(&language)
    }

    /// Rules registered for `language`.
    pub fn get(&self, language: LanguageId) -> Option<&dyn LanguageRules> {
        self.rules.get(&language).map(|rules| rules.as_ref())
    }

    /// Returns `true` if `language` has language-specific rules.
    pub fn contains(&self, language: LanguageId) -> bool {
        self.rules.contains_key(&language)
    }

    /// Languages with registered rules, in `LanguageId` order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageId> + '_ {
        self.rules.keys().copied()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no language has rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().map(|(lang, rules)| (lang, rules.name())))
            .finish()
    }
}
