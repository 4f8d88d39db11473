//! Diagnostic rendering.

use editor_lint::{Diagnostic, Document};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: severity[code]: message`
    #[default]
    Human,
    /// One JSON array for all inputs.
    Json,
}

/// One scanned input.
#[derive(Debug)]
pub struct ScannedFile {
    pub path: String,
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct Record<'a> {
    path: &'a str,
    line: usize,
    column: usize,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

pub fn write(format: OutputFormat, files: &[ScannedFile], out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_human(files, out),
        OutputFormat::Json => write_json(files, out),
    }
}

fn records(files: &[ScannedFile]) -> impl Iterator<Item = Record<'_>> {
    files.iter().flat_map(|file| {
        file.diagnostics.iter().map(move |diagnostic| {
            let (line, column) = file.document.char_offset_to_position(diagnostic.range.start);
            Record {
                path: &file.path,
                line: line + 1,
                column: column + 1,
                diagnostic,
            }
        })
    })
}

fn write_human(files: &[ScannedFile], out: &mut impl Write) -> io::Result<()> {
    for record in records(files) {
        let diag = record.diagnostic;
        writeln!(
            out,
            "{}:{}:{}: {}[{}]: {}",
            record.path, record.line, record.column, diag.severity, diag.code, diag.message
        )?;
    }
    Ok(())
}

fn write_json(files: &[ScannedFile], out: &mut impl Write) -> io::Result<()> {
    let records: Vec<Record<'_>> = records(files).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_lint::DiagnosticRange;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ScannedFile> {
        vec![ScannedFile {
            path: "src/app.js".to_string(),
            document: Document::from_text("ok;\nlet x = 1 \n"),
            diagnostics: vec![
                Diagnostic::warning(
                    DiagnosticRange::new(13, 14),
                    "trailing-whitespace",
                    "trailing whitespace",
                ),
                Diagnostic::info(
                    DiagnosticRange::new(13, 14),
                    "missing-semicolon",
                    "possible missing semicolon",
                ),
            ],
        }]
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write(format, &sample(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output() {
        assert_eq!(
            render(OutputFormat::Human),
            "src/app.js:2:10: warning[trailing-whitespace]: trailing whitespace\n\
             src/app.js:2:10: info[missing-semicolon]: possible missing semicolon\n"
        );
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(
            value[0],
            serde_json::json!({
                "path": "src/app.js",
                "line": 2,
                "column": 10,
                "from": 13,
                "to": 14,
                "severity": "warning",
                "code": "trailing-whitespace",
                "message": "trailing whitespace"
            })
        );
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_no_diagnostics() {
        let mut out = Vec::new();
        write(OutputFormat::Json, &[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
