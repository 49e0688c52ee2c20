use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub adb: AdbConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdbConfig {
    /// adb binary name or path; `~` is expanded by the executor.
    #[serde(default = "default_adb_bin")]
    pub bin: String,
}

fn default_adb_bin() -> String {
    "adb".to_string()
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            bin: default_adb_bin(),
        }
    }
}

/// Initial session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub default_device: Option<String>,

    #[serde(default)]
    pub default_package: Option<String>,

    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// `!<name> [args...]` runs `command [args...]` through adb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    pub name: String,
    pub command: String,
}
