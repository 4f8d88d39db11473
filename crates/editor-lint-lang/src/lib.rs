#![warn(missing_docs)]
//! `editor-lint-lang` - language identifiers and per-language lint settings for `editor-lint`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any regex or parsing
//! machinery. It provides the closed set of languages the scanner knows about, resolution from
//! editor language tags / file extensions, and the small bits of data-driven configuration
//! (line-length thresholds, comment tokens) that rule tables need.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Line-length threshold used by every language except markdown.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// Line-length threshold for markdown prose.
pub const MARKDOWN_MAX_LINE_LENGTH: usize = 100;

/// A language tag from the closed set understood by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    /// Python.
    Python,
    /// JavaScript (also used for TypeScript-like tags).
    JavaScript,
    /// C and C++.
    Cpp,
    /// Java.
    Java,
    /// Rust.
    Rust,
    /// Go.
    Go,
    /// SQL.
    Sql,
    /// HTML.
    Html,
    /// CSS.
    Css,
    /// JSON.
    Json,
    /// Markdown.
    Markdown,
    /// PHP.
    Php,
}

/// Returned when a tag does not name a known language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag `{0}`")]
pub struct UnknownLanguage(pub String);

impl LanguageId {
    /// Every language, in declaration order.
    pub const ALL: [LanguageId; 12] = [
        LanguageId::Python,
        LanguageId::JavaScript,
        LanguageId::Cpp,
        LanguageId::Java,
        LanguageId::Rust,
        LanguageId::Go,
        LanguageId::Sql,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Json,
        LanguageId::Markdown,
        LanguageId::Php,
    ];

    /// Canonical tag (as used by the editor and in config files).
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::JavaScript => "javascript",
            LanguageId::Cpp => "cpp",
            LanguageId::Java => "java",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
            LanguageId::Sql => "sql",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Json => "json",
            LanguageId::Markdown => "markdown",
            LanguageId::Php => "php",
        }
    }

    /// Resolve an editor language tag (case-insensitive, common aliases accepted).
    ///
    /// Returns `None` for tags outside the closed set; callers treat that as
    /// "universal rules only", not as an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let id = match tag.as_str() {
            "python" | "py" | "python3" => LanguageId::Python,
            "javascript" | "js" | "jsx" | "mjs" | "cjs" | "ecmascript" => LanguageId::JavaScript,
            "cpp" | "c++" | "cxx" | "cc" | "c" | "h" | "hpp" => LanguageId::Cpp,
            "java" => LanguageId::Java,
            "rust" | "rs" => LanguageId::Rust,
            "go" | "golang" => LanguageId::Go,
            "sql" => LanguageId::Sql,
            "html" | "htm" | "xhtml" => LanguageId::Html,
            "css" => LanguageId::Css,
            "json" => LanguageId::Json,
            "markdown" | "md" => LanguageId::Markdown,
            "php" => LanguageId::Php,
            _ => return None,
        };
        Some(id)
    }

    /// Detect the language from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let id = match ext.as_str() {
            "py" | "pyw" | "pyi" => LanguageId::Python,
            "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
            "c" | "h" | "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => LanguageId::Cpp,
            "java" => LanguageId::Java,
            "rs" => LanguageId::Rust,
            "go" => LanguageId::Go,
            "sql" => LanguageId::Sql,
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "json" => LanguageId::Json,
            "md" | "markdown" => LanguageId::Markdown,
            "php" => LanguageId::Php,
            _ => return None,
        };
        Some(id)
    }

    /// Detect the language of a file from its path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Maximum line length (in characters) before the line-length rule fires.
    pub fn max_line_length(self) -> usize {
        match self {
            LanguageId::Markdown => MARKDOWN_MAX_LINE_LENGTH,
            _ => DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Comment tokens for this language.
    pub fn comment_config(self) -> CommentConfig {
        match self {
            LanguageId::Python => CommentConfig::line("#"),
            LanguageId::JavaScript
            | LanguageId::Cpp
            | LanguageId::Java
            | LanguageId::Rust
            | LanguageId::Go
            | LanguageId::Php => CommentConfig::line_and_block("//", "/*", "*/"),
            LanguageId::Sql => CommentConfig::line_and_block("--", "/*", "*/"),
            LanguageId::Css => CommentConfig::block("/*", "*/"),
            LanguageId::Html | LanguageId::Markdown => CommentConfig::block("<!--", "-->"),
            LanguageId::Json => CommentConfig::default(),
        }
    }
}

/// Line-length threshold for an optional language (unknown languages use the default).
pub fn max_line_length(language: Option<LanguageId>) -> usize {
    language.map_or(DEFAULT_MAX_LINE_LENGTH, LanguageId::max_line_length)
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Comment tokens/config for a given language.
///
/// Rule tables use this to recognise full-line comments without hard-coding tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if `line` (after leading whitespace) opens a comment.
    ///
    /// Only the opening token is checked: a line starting a block comment counts as a comment
    /// line even if code follows the closing token.
    pub fn starts_comment(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        if self.has_line() && self.line.as_deref().is_some_and(|t| trimmed.starts_with(t)) {
            return true;
        }
        self.has_block()
            && self
                .block_start
                .as_deref()
                .is_some_and(|t| trimmed.starts_with(t))
    }
}
