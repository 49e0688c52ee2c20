// core/src/error/executor_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("failed to spawn process: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for process: {program}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
