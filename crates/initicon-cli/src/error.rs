//! Error types for the initicon CLI.

use std::path::PathBuf;

use thiserror::Error;

use initicon::IniticonError;

/// Errors surfaced by the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Avatar(#[from] IniticonError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(String),

    #[error("Missing configuration file: {0}")]
    MissingConfigFile(PathBuf),

    #[error("{0}")]
    InvalidArgument(String),
}
