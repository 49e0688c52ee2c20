use std::path::PathBuf;

use clap::Parser;
use replicant_core::api::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "replicant", version, about = "Interactive adb shell with session defaults")]
pub struct Args {
    /// Config file (default: ./replicant.toml, then the user config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// adb binary name or path.
    #[arg(long)]
    pub adb: Option<String>,

    /// Initial default device.
    #[arg(short = 'd', long)]
    pub device: Option<String>,

    /// Initial default package.
    #[arg(short = 'p', long)]
    pub package: Option<String>,

    /// Echo device lists and log at debug level.
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Run these lines in order and exit instead of starting the REPL.
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "command", action = clap::ArgAction::Append)]
    pub commands: Vec<String>,
}

impl Args {
    /// Flags win over config file and env overrides.
    pub fn apply_to(&self, cfg: &mut AppConfig) {
        if let Some(adb) = &self.adb {
            cfg.adb.bin = adb.clone();
        }
        if let Some(device) = &self.device {
            cfg.session.default_device = Some(device.clone());
        }
        if let Some(package) = &self.package {
            cfg.session.default_package = Some(package.clone());
        }
        if self.debug {
            cfg.session.debug = true;
        }
    }
}
