//! JavaScript delegation to an `eslint` process.

use editor_lint::{
    Diagnostic, DiagnosticRange, DiagnosticSeverity, Document, EsLintOptions, ExternalLintError,
    ExternalLinter,
};
use serde::Deserialize;
use std::io::Write;
use std::process::{Command, Stdio};

const LINTER: &str = "eslint";

/// ESLint 9 defaults to flat config and rejects the eslintrc flags built by [`option_args`].
const FLAT_CONFIG_ENV: &str = "ESLINT_USE_FLAT_CONFIG";

/// Runs `eslint --stdin --format json` once per document.
#[derive(Debug, Clone)]
pub struct EslintProcess {
    program: String,
    args: Vec<String>,
    options: EsLintOptions,
}

impl EslintProcess {
    /// Parse a whitespace-separated command line such as `npx eslint`.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            options: EsLintOptions::default(),
        })
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(option_args(&self.options))
            .args(["--stdin", "--format", "json"])
            .env(FLAT_CONFIG_ENV, "false")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl ExternalLinter for EslintProcess {
    fn name(&self) -> &str {
        LINTER
    }

    fn lint(&self, document: &Document) -> Result<Vec<Diagnostic>, ExternalLintError> {
        let io_error = |source: std::io::Error| ExternalLintError::Io {
            linter: LINTER.to_string(),
            source,
        };

        let mut child = self.command().spawn().map_err(io_error)?;
        // A linter that exits early breaks the pipe; its status and stderr say more than EPIPE.
        let write_error = child
            .stdin
            .take()
            .and_then(|mut stdin| stdin.write_all(document.text().as_bytes()).err());
        let output = child.wait_with_output().map_err(io_error)?;

        // ESLint exits with 1 when it found problems; only an empty report is a failure.
        if output.stdout.trim_ascii().is_empty() {
            if !output.status.success() {
                return Err(ExternalLintError::Failed {
                    linter: LINTER.to_string(),
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
            return match write_error {
                Some(source) => Err(io_error(source)),
                None => Ok(Vec::new()),
            };
        }

        parse_report(document, &output.stdout)
    }
}

/// eslintrc-style command line flags for `options`.
fn option_args(options: &EsLintOptions) -> Vec<String> {
    let mut args = vec![
        "--no-eslintrc".to_string(),
        format!(
            "--parser-options=ecmaVersion:{}",
            options.parser_options.ecma_version
        ),
        format!(
            "--parser-options=sourceType:{}",
            options.parser_options.source_type
        ),
    ];

    let env: Vec<&str> = options
        .env
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| name.as_str())
        .collect();
    if !env.is_empty() {
        args.push(format!("--env={}", env.join(",")));
    }

    for (rule, setting) in &options.rules {
        args.push("--rule".to_string());
        args.push(serde_json::json!({ rule: setting }).to_string());
    }
    args
}

#[derive(Debug, Deserialize)]
struct FileReport {
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    rule_id: Option<String>,
    severity: u8,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
    end_line: Option<usize>,
    end_column: Option<usize>,
}

/// Convert ESLint's JSON report (1-based lines, 1-based UTF-16 columns) into diagnostics.
pub fn parse_report(
    document: &Document,
    json: &[u8],
) -> Result<Vec<Diagnostic>, ExternalLintError> {
    let reports: Vec<FileReport> =
        serde_json::from_slice(json).map_err(|source| ExternalLintError::MalformedOutput {
            linter: LINTER.to_string(),
            source,
        })?;

    let len = document.len_chars();
    let diagnostics = reports
        .into_iter()
        .flat_map(|report| report.messages)
        .map(|message| {
            let start = to_offset(document, message.line, message.column).unwrap_or(0);
            let end = to_offset(document, message.end_line, message.end_column).unwrap_or(start);
            let severity = if message.severity >= 2 {
                DiagnosticSeverity::Error
            } else {
                DiagnosticSeverity::Warning
            };
            Diagnostic::new(
                DiagnosticRange::new(start, end.max(start)).clamp_to(len),
                severity,
                message.rule_id.unwrap_or_else(|| LINTER.to_string()),
                message.message,
            )
        })
        .collect();
    Ok(diagnostics)
}

fn to_offset(document: &Document, line: Option<usize>, column: Option<usize>) -> Option<usize> {
    let line = line?.checked_sub(1)?;
    let column = column.unwrap_or(1).saturating_sub(1);
    let column = document.utf16_to_char_column(line, column);
    Some(document.position_to_char_offset(line, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"[{
        "filePath": "<text>",
        "messages": [
            {"ruleId": "semi", "severity": 2, "message": "Missing semicolon.",
             "line": 1, "column": 10, "endLine": 2, "endColumn": 1},
            {"ruleId": "no-unused-vars", "severity": 1, "message": "'é😀' is unused.",
             "line": 2, "column": 7, "endLine": 2, "endColumn": 10},
            {"ruleId": null, "fatal": true, "severity": 2,
             "message": "Parsing error: Unexpected token", "line": 9, "column": 3}
        ],
        "errorCount": 2,
        "warningCount": 1
    }]"#;

    #[test]
    fn test_parse_report_converts_positions() {
        let doc = Document::from_text("let a = 1\nlet 😀x = 2;");
        let diags = parse_report(&doc, REPORT.as_bytes()).unwrap();
        let got: Vec<_> = diags
            .iter()
            .map(|d| (d.code.as_str(), d.severity, d.range))
            .collect();
        assert_eq!(
            got,
            vec![
                ("semi", DiagnosticSeverity::Error, DiagnosticRange::new(9, 10)),
                (
                    "no-unused-vars",
                    DiagnosticSeverity::Warning,
                    DiagnosticRange::new(15, 18)
                ),
                ("eslint", DiagnosticSeverity::Error, DiagnosticRange::new(21, 21)),
            ]
        );
        assert_eq!(diags[2].message, "Parsing error: Unexpected token");
    }

    #[test]
    fn test_malformed_report() {
        let doc = Document::from_text("x");
        let err = parse_report(&doc, b"Oops! Something went wrong").unwrap_err();
        assert!(matches!(err, ExternalLintError::MalformedOutput { .. }));
    }

    #[test]
    fn test_option_args() {
        let args = option_args(&EsLintOptions::default());
        assert_eq!(
            args,
            vec![
                "--no-eslintrc",
                "--parser-options=ecmaVersion:2019",
                "--parser-options=sourceType:module",
                "--env=browser,es2024,es6",
                "--rule",
                r#"{"no-undef":"off"}"#,
                "--rule",
                r#"{"semi":["error","always"]}"#,
            ]
        );
    }

    #[test]
    fn test_command_line_parsing() {
        let process = EslintProcess::from_command_line("  npx eslint --quiet ").unwrap();
        assert_eq!(process.program, "npx");
        assert_eq!(process.args, vec!["eslint", "--quiet"]);
        assert!(EslintProcess::from_command_line("   ").is_none());
    }

    /// Answers like ESLint in eslintrc mode, and fails like ESLint 9 in flat-config mode.
    #[cfg(unix)]
    const FAKE_ESLINT: &str = r#"cat > /dev/null
if [ "$ESLINT_USE_FLAT_CONFIG" != "false" ]; then
    echo "Invalid option '--no-eslintrc'" >&2
    exit 2
fi
printf '%s' '[{"filePath":"<text>","messages":[{"ruleId":"semi","severity":2,"message":"Missing semicolon.","line":1,"column":10,"endLine":2,"endColumn":1}]}]'
exit 1
"#;

    #[cfg(unix)]
    fn script_process(dir: &std::path::Path, body: &str) -> EslintProcess {
        let script = dir.join("fake-eslint.sh");
        std::fs::write(&script, body).unwrap();
        EslintProcess::from_command_line(&format!("sh {}", script.display())).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_delegated_report_reaches_the_scan() {
        use editor_lint::{DelegatedRules, DiagnosticScanner, LanguageId, RuleSet};

        let dir = tempfile::tempdir().unwrap();
        let process = script_process(dir.path(), FAKE_ESLINT);
        let rules = RuleSet::new().with(LanguageId::JavaScript, DelegatedRules::new(process));
        let scanner = DiagnosticScanner::new(rules).unwrap();

        let doc = Document::from_text("let a = 1\nconsole.log(a);\n");
        let diags = scanner.scan_document(&doc, Some(LanguageId::JavaScript));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, "semi");
        assert_eq!(diags[0].severity, DiagnosticSeverity::Error);
        assert_eq!(diags[0].range, DiagnosticRange::new(9, 10));
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let process = script_process(dir.path(), "echo 'Oops! Something went wrong' >&2\nexit 2\n");

        // Larger than a pipe buffer, so writing stdin fails once the script is gone.
        let doc = Document::from_text(&"x".repeat(1 << 20));
        match process.lint(&doc) {
            Err(ExternalLintError::Failed { stderr, .. }) => {
                assert_eq!(stderr, "Oops! Something went wrong");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_binary_is_an_io_error() {
        let process =
            EslintProcess::from_command_line("editor-lint-test-no-such-eslint-binary").unwrap();
        let err = process.lint(&Document::from_text("x")).unwrap_err();
        assert!(matches!(err, ExternalLintError::Io { .. }));
    }
}
