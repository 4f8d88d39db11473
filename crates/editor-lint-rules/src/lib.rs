//! `editor-lint-rules` - the default regex-based language rules for `editor-lint`.
//!
//! Every rule here is a line heuristic, *not* a parser: string and comment stripping is
//! best-effort (see [`strip`]) and the missing-semicolon check is known to over-fire on
//! continuation lines and constructs that need no terminator. False positives and negatives are
//! accuracy limits of the heuristics, not runtime errors.
//!
//! | language | rules |
//! |---|---|
//! | python | `print(` outside strings/comments, mixed tab/space indentation |
//! | javascript | `console.log` / `console.debug`, missing semicolon |
//! | cpp, java, php | missing semicolon, `printf(` (strings and comments stripped) |
//! | go | `fmt.Print` |
//! | rust | `println!` |
//! | sql | lowercase `select` / `from` / `where` / `join` |
//! | html | inline `style=` |
//! | css | `!important` |
//! | json | trailing comma before `]` / `}` |
//! | markdown | none (only the tighter line-length limit) |

pub mod languages;
pub mod pattern;
pub mod strip;

use editor_lint::{DiagnosticScanner, LanguageId, LanguageRules, RuleSet};
use std::sync::Arc;

pub use languages::{CFamilyRules, JavaScriptRules, PythonRules};
pub use pattern::{PatternRule, PatternRules};
pub use strip::{Strippers, ends_without_terminator, is_full_line_comment};

/// Rule id: Python `print(` call outside strings and comments.
pub const DEBUG_PRINT: &str = "debug-print";
/// Rule id: Python line indented with both tabs and spaces.
pub const MIXED_INDENTATION: &str = "mixed-indentation";
/// Rule id: JavaScript `console.log` / `console.debug`.
pub const CONSOLE_LOG: &str = "console-log";
/// Rule id: statement that looks unterminated.
pub const MISSING_SEMICOLON: &str = "missing-semicolon";
/// Rule id: C-family `printf(` call.
pub const DEBUG_OUTPUT: &str = "debug-output";
/// Rule id: Go `fmt.Print*`.
pub const FMT_PRINT: &str = "fmt-print";
/// Rule id: Rust `println!`.
pub const PRINTLN: &str = "println";
/// Rule id: lowercase SQL keyword.
pub const SQL_KEYWORD_CASE: &str = "sql-keyword-case";
/// Rule id: HTML inline `style=` attribute.
pub const INLINE_STYLE: &str = "inline-style";
/// Rule id: CSS `!important`.
pub const CSS_IMPORTANT: &str = "css-important";
/// Rule id: comma before a closing `]` or `}`.
pub const JSON_TRAILING_COMMA: &str = "json-trailing-comma";

/// Build the default rule table.
///
/// Build it once and share it; each call compiles every pattern again.
pub fn default_rule_set() -> Result<RuleSet, regex::Error> {
    let mut rules = RuleSet::new();

    rules.register(LanguageId::Python, PythonRules::new()?);
    rules.register(LanguageId::JavaScript, JavaScriptRules::new()?);

    let c_family: Arc<dyn LanguageRules> = Arc::new(CFamilyRules::new()?);
    for language in [LanguageId::Cpp, LanguageId::Java, LanguageId::Php] {
        rules.register_shared(language, Arc::clone(&c_family));
    }

    rules.register(LanguageId::Go, languages::go_rules()?);
    rules.register(LanguageId::Rust, languages::rust_rules()?);
    rules.register(LanguageId::Sql, languages::sql_rules()?);
    rules.register(LanguageId::Html, languages::html_rules()?);
    rules.register(LanguageId::Css, languages::css_rules()?);
    rules.register(LanguageId::Json, languages::json_rules()?);

    Ok(rules)
}

/// A scanner over [`default_rule_set`] with the default configuration.
pub fn default_scanner() -> Result<DiagnosticScanner, regex::Error> {
    DiagnosticScanner::new(default_rule_set()?)
}
