use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid eslint command `{0}`")]
    EslintCommand(String),

    #[error("failed to build rule table: {0}")]
    Rules(#[from] regex::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
