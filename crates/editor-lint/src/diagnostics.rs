//! Diagnostics data model.
//!
//! Scanners produce [`Diagnostic`]s; renderers map their character ranges back to
//! line/column (see [`Document::char_offset_to_position`](crate::Document::char_offset_to_position))
//! for gutter markers, underlines and problem lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open character-offset range (`start..end`) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagnosticRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`) from the start of the document.
    #[serde(rename = "from")]
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`) from the start of the document.
    #[serde(rename = "to")]
    pub end: usize,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A range covering the single character before `end`, or an empty range at `start` if the
    /// line is empty (`max(start, end - 1)..end`).
    pub fn last_char(start: usize, end: usize) -> Self {
        Self::new(end.saturating_sub(1).max(start), end)
    }

    /// Range length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for zero-width ranges.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Clamp the range into `0..=len`, keeping `start <= end`.
    pub fn clamp_to(self, len: usize) -> Self {
        let end = self.end.min(len);
        Self::new(self.start.min(end), end)
    }
}

/// Diagnostic severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Informational diagnostics.
    Info,
    /// Warning diagnostics.
    Warning,
    /// Error diagnostics.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "info"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic item for the scanned document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic range in character offsets.
    #[serde(flatten)]
    pub range: DiagnosticRange,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Id of the rule that produced the diagnostic (e.g. `"trailing-whitespace"`).
    pub code: String,
    /// Diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        range: DiagnosticRange,
        severity: DiagnosticSeverity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an info diagnostic.
    pub fn info(range: DiagnosticRange, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Info, code, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(
        range: DiagnosticRange,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(range, DiagnosticSeverity::Warning, code, message)
    }

    /// Create an error diagnostic.
    pub fn error(range: DiagnosticRange, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Error, code, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} {}[{}]: {}",
            self.range.start, self.range.end, self.severity, self.code, self.message
        )
    }
}
