mod cli_error;
mod command_error;
mod config_error;
mod executor_error;

pub use cli_error::CliError;
pub use command_error::CommandError;
pub use config_error::ConfigError;
pub use executor_error::ExecutorError;
