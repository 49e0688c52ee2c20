use anyhow::{Context, Result};

use replicant_core::api::{AppConfig, Executor, Registry};

use crate::commands::register_aliases;
use crate::executor::AdbExecutor;

pub fn build_executor(cfg: &AppConfig) -> Result<Box<dyn Executor>> {
    let bin = shellexpand::full(cfg.adb.bin.trim())
        .with_context(|| format!("failed to expand adb path {:?}", cfg.adb.bin))?;
    if bin.trim().is_empty() {
        anyhow::bail!("adb path expands to an empty string");
    }
    tracing::debug!(target: "replicant.adb", bin = %bin, "using adb binary");
    Ok(Box::new(AdbExecutor::new(bin.into_owned())))
}

/// Built-ins first, then config aliases.
pub fn build_registry(cfg: &AppConfig) -> Registry {
    let mut registry = Registry::with_builtins();
    let added = register_aliases(&mut registry, &cfg.aliases);
    tracing::debug!(target: "replicant.registry", aliases = added, "registry ready");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use replicant_core::api::AliasConfig;

    #[test]
    fn registry_includes_config_aliases() {
        let mut cfg = AppConfig::default();
        cfg.aliases.push(AliasConfig {
            name: "top".into(),
            command: "shell top -n 1".into(),
        });
        let registry = build_registry(&cfg);
        assert!(registry.contains("!top"));
        assert!(registry.contains("!package"));
    }

    #[test]
    fn blank_adb_path_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.adb.bin = "  ".into();
        assert!(build_executor(&cfg).is_err());
    }
}
