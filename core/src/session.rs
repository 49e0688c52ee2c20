use crate::config::SessionConfig;

/// Session-lifetime defaults applied to every forwarded adb invocation.
///
/// Only `!package`, `!device` and `!reset` write to it; commands receive it by
/// `&mut` through [`crate::command::CommandContext`], so there is exactly one
/// writer at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    default_device: Option<String>,
    default_package: Option<String>,
    debug: bool,
}

impl Session {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self {
            default_device: non_blank(cfg.default_device.as_deref()),
            default_package: non_blank(cfg.default_package.as_deref()),
            debug: cfg.debug,
        }
    }

    pub fn default_device(&self) -> Option<&str> {
        self.default_device.as_deref()
    }

    pub fn set_default_device(&mut self, device: Option<String>) {
        tracing::debug!(target: "replicant.session", device = ?device, "default device changed");
        self.default_device = device;
    }

    pub fn default_package(&self) -> Option<&str> {
        self.default_package.as_deref()
    }

    pub fn set_default_package(&mut self, package: Option<String>) {
        tracing::debug!(target: "replicant.session", package = ?package, "default package changed");
        self.default_package = package;
    }

    /// Drops both defaults.
    pub fn clear(&mut self) {
        self.set_default_device(None);
        self.set_default_package(None);
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
