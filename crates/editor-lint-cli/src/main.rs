//! editor-lint - scan source files with the editor's diagnostic scanner.

mod config;
mod error;
mod eslint;
mod output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use editor_lint::{DelegatedRules, DiagnosticScanner, DiagnosticSeverity, Document, LanguageId};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};
use crate::eslint::EslintProcess;
use crate::output::{OutputFormat, ScannedFile};

const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "editor-lint", version, about = "Scan source files for common problems")]
struct Cli {
    /// Files to scan (`-` or none reads standard input)
    paths: Vec<PathBuf>,

    /// Language tag; detected from the file extension when omitted
    #[arg(short, long, value_name = "TAG")]
    language: Option<String>,

    /// TOML config file (default: ./.editor-lint.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Delegate JavaScript to this ESLint command (e.g. "npx eslint")
    #[arg(long, value_name = "CMD", env = "EDITOR_LINT_ESLINT")]
    eslint: Option<String>,

    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    /// More logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns `true` when any error-severity diagnostic was reported.
fn run(cli: &Cli) -> Result<bool> {
    let mut config = config::load(cli.config.as_deref())?;
    config.strict |= cli.strict;

    let mut rules = editor_lint_rules::default_rule_set()?;
    if let Some(command_line) = &cli.eslint {
        let process = EslintProcess::from_command_line(command_line)
            .ok_or_else(|| CliError::EslintCommand(command_line.clone()))?;
        rules.register(LanguageId::JavaScript, DelegatedRules::new(process));
    }
    let scanner = DiagnosticScanner::new(rules)?.with_config(config);

    let forced = cli.language.as_deref().map(|tag| {
        let language = LanguageId::from_tag(tag);
        if language.is_none() {
            tracing::warn!(tag, "unknown language; only universal rules apply");
        }
        language
    });

    let stdin_only = [PathBuf::from(STDIN_PATH)];
    let paths = if cli.paths.is_empty() {
        &stdin_only[..]
    } else {
        &cli.paths[..]
    };

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let (name, text) = read_input(path)?;
        let language = forced.unwrap_or_else(|| LanguageId::from_path(path));
        let document = Document::from_text(&text);
        let diagnostics = scanner.scan_document(&document, language);
        tracing::info!(
            path = %name,
            language = language.map_or("none", LanguageId::as_str),
            diagnostics = diagnostics.len(),
            "scanned"
        );
        files.push(ScannedFile {
            path: name,
            document,
            diagnostics,
        });
    }

    let stdout = std::io::stdout();
    output::write(cli.format, &files, &mut stdout.lock()).map_err(CliError::Output)?;

    Ok(files
        .iter()
        .flat_map(|file| &file.diagnostics)
        .any(|diag| diag.severity == DiagnosticSeverity::Error))
}

fn read_input(path: &Path) -> Result<(String, String)> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(CliError::Stdin)?;
        return Ok(("<stdin>".to_string(), text));
    }

    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((path.display().to_string(), text))
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
