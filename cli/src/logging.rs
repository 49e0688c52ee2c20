use std::path::{Path, PathBuf};

use replicant_core::api::{CliError, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the config level;
/// `--debug` raises the config level to `debug`.
///
/// Logs never go to stdout, which carries command output. The returned guard
/// must be held until exit so buffered file logs are flushed.
pub fn init(cfg: &LoggingConfig, debug: bool) -> Result<Option<WorkerGuard>, CliError> {
    let level = if debug { "debug" } else { cfg.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    let Some(file) = cfg.file.as_deref().filter(|f| !f.trim().is_empty()) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let (dir, name) = split_log_path(file)?;
    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

fn split_log_path(file: &str) -> Result<(PathBuf, PathBuf), CliError> {
    let path = PathBuf::from(shellexpand::tilde(file.trim()).into_owned());
    let name = path
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| CliError::Logging(format!("invalid log file path: {file}")))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();
    Ok((dir, name))
}
