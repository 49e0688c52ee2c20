//! The executor capability: the only way the core reaches `adb`.
//!
//! The core decides *what* to run (an [`Invocation`]) and whether it is
//! captured or attached; implementations decide *how* (binary path, shell,
//! decoding). `replicant-plugins` provides the process-spawning one.

use crate::error::ExecutorError;

/// Token that terminates every attached-device line of `adb devices`.
const DEVICE_STATE: &str = "device";

/// One adb invocation, minus the adb binary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub device: Option<String>,
    /// Opaque command line forwarded verbatim (e.g. `shell ls /sdcard`).
    pub line: String,
    pub extra_args: Vec<String>,
}

impl Invocation {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            device: None,
            line: line.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn on_device(mut self, device: Option<&str>) -> Self {
        self.device = device.map(str::to_string);
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// First whitespace-separated token of the forwarded line.
    pub fn command_name(&self) -> &str {
        self.line.split_whitespace().next().unwrap_or("")
    }

    /// Renders everything that follows the adb binary:
    /// `[-s <device>] <line> [extra...]`.
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.extra_args.len());
        if let Some(device) = self.device.as_deref() {
            parts.push("-s");
            parts.push(device);
        }
        if !self.line.is_empty() {
            parts.push(&self.line);
        }
        parts.extend(self.extra_args.iter().map(String::as_str));
        parts.join(" ")
    }
}

pub trait Executor {
    /// Runs detached and returns stdout. A non-zero exit is not an error.
    fn run_captured(&self, invocation: &Invocation) -> Result<String, ExecutorError>;

    /// Runs attached to the terminal and returns the exit code.
    fn run_interactive(&self, invocation: &Invocation) -> Result<i32, ExecutorError>;

    /// Identifiers currently reported by `adb devices`. Never cached.
    fn device_list(&self) -> Result<Vec<String>, ExecutorError> {
        let raw = self.run_captured(&Invocation::new("devices"))?;
        Ok(parse_device_list(&raw))
    }
}

/// Keeps the lines of `adb devices` output that end in the `device` state and
/// strips that token, e.g. `emulator-5554\tdevice` becomes `emulator-5554`.
/// Header lines and devices in other states (`offline`, `unauthorized`) are
/// dropped.
pub fn parse_device_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim_end)
        .filter_map(|line| line.strip_suffix(DEVICE_STATE))
        .filter(|rest| rest.ends_with(char::is_whitespace))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
