//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `replicant_core::api` instead of reaching into internal modules.

pub use crate::command::{
    execute, Command, CommandContext, CommandKind, CommandOutput, DefaultCommand, Outcome,
};
pub use crate::config::{AdbConfig, AliasConfig, AppConfig, LoggingConfig, SessionConfig};
pub use crate::error::{CliError, CommandError, ConfigError, ExecutorError};
pub use crate::executor::{parse_device_list, Executor, Invocation};
pub use crate::input::{parse_line, ParsedInput, SENTINEL};
pub use crate::registry::{CommandFactory, Registry};
pub use crate::session::Session;
