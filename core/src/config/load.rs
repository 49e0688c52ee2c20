use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

const CONFIG_FILE: &str = "replicant.toml";

/// `replicant.toml` in the working directory, else the per-user config dir.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("replicant").join(CONFIG_FILE))
        .filter(|p| p.exists())
}

/// Loads an explicit config file (which must exist) or the default one
/// (defaults when absent), then applies env overrides.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => load_from(p)?,
        None => match default_config_path() {
            Some(p) => load_from(&p)?,
            None => AppConfig::default(),
        },
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    validate(&cfg)?;
    Ok(cfg)
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    load(None)
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(target: "replicant.config", path = %path.display(), "loaded config file");
    toml::from_str::<AppConfig>(&s).map_err(ConfigError::Parse)
}

/// `REPLICANT_ADB`, `REPLICANT_DEVICE`, `REPLICANT_PACKAGE`; blank values are
/// ignored. `lookup` is injectable so tests don't touch the process env.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("REPLICANT_ADB") {
        cfg.adb.bin = v;
    }
    if let Some(v) = get("REPLICANT_DEVICE") {
        cfg.session.default_device = Some(v);
    }
    if let Some(v) = get("REPLICANT_PACKAGE") {
        cfg.session.default_package = Some(v);
    }
}

fn validate(cfg: &AppConfig) -> Result<(), ConfigError> {
    if cfg.adb.bin.trim().is_empty() {
        return Err(ConfigError::Validation("adb.bin must not be empty".into()));
    }
    for alias in &cfg.aliases {
        let name = alias.name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) || name.starts_with('!') {
            return Err(ConfigError::Validation(format!(
                "invalid alias name: {:?}",
                alias.name
            )));
        }
        if alias.command.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "alias {:?} has an empty command",
                alias.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let f = write_config("[session]\ndefault_package = \"com.example\"\n");
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.adb.bin, "adb");
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.session.default_package.as_deref(), Some("com.example"));
        assert!(cfg.aliases.is_empty());
    }

    #[test]
    fn aliases_are_parsed() {
        let f = write_config(
            r#"
[adb]
bin = "/opt/android/platform-tools/adb"

[[aliases]]
name = "top"
command = "shell top -n 1"
"#,
        );
        let cfg = load(Some(f.path())).unwrap();
        assert_eq!(cfg.adb.bin, "/opt/android/platform-tools/adb");
        assert_eq!(cfg.aliases.len(), 1);
        assert_eq!(cfg.aliases[0].name, "top");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let f = write_config("[adb\nbin = ");
        assert!(matches!(load_from(f.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bad_alias_name_fails_validation() {
        let f = write_config("[[aliases]]\nname = \"two words\"\ncommand = \"shell ls\"\n");
        assert!(matches!(load(Some(f.path())), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn env_overrides_skip_blank_values() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |key| match key {
            "REPLICANT_ADB" => Some("  ".to_string()),
            "REPLICANT_DEVICE" => Some("emulator-5556".to_string()),
            _ => None,
        });
        assert_eq!(cfg.adb.bin, "adb");
        assert_eq!(cfg.session.default_device.as_deref(), Some("emulator-5556"));
        assert_eq!(cfg.session.default_package, None);
    }
}
