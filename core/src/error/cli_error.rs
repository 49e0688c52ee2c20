// core/src/error/cli_error.rs
use thiserror::Error;

use super::{CommandError, ConfigError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Setup(String),
}
