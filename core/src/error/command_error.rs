// core/src/error/command_error.rs
use thiserror::Error;

use super::ExecutorError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("failed to write command output")]
    Output(#[source] std::io::Error),
}
