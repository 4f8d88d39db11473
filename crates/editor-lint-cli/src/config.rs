//! `.editor-lint.toml` loading.
//!
//! ```toml
//! strict = false
//! disabled_rules = ["todo-marker"]
//! default_max_line_length = 100
//!
//! [severity_overrides]
//! missing-semicolon = "warning"
//!
//! [max_line_length]
//! python = 79
//! ```

use crate::error::{CliError, Result};
use editor_lint::LintConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".editor-lint.toml";

/// Load `explicit`, or `.editor-lint.toml` from the working directory when it exists.
pub fn load(explicit: Option<&Path>) -> Result<LintConfig> {
    if let Some(path) = explicit {
        return read(path);
    }

    let discovered = Path::new(DEFAULT_CONFIG_FILE);
    if discovered.is_file() {
        tracing::debug!(path = %discovered.display(), "using discovered config");
        read(discovered)
    } else {
        Ok(LintConfig::default())
    }
}

fn read(path: &Path) -> Result<LintConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_lint::{DiagnosticSeverity, LanguageId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lint.toml");
        std::fs::write(
            &path,
            r#"
strict = true
disabled_rules = ["todo-marker"]
default_max_line_length = 90

[severity_overrides]
missing-semicolon = "warning"

[max_line_length]
python = 79
"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        let expected = LintConfig::new()
            .strict()
            .disable_rule("todo-marker")
            .override_severity("missing-semicolon", DiagnosticSeverity::Warning)
            .with_max_line_length(LanguageId::Python, 79);
        assert_eq!(
            config,
            LintConfig {
                default_max_line_length: Some(90),
                ..expected
            }
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lint.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load(Some(&path)).unwrap(), LintConfig::default());
    }

    #[test]
    fn test_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(load(Some(&missing)), Err(CliError::Read { path, .. }) if path == missing));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "strict = \"yes\"").unwrap();
        let err = load(Some(&bad)).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
