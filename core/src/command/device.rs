use crate::error::CommandError;

use super::{Command, CommandContext, CommandKind, CommandOutput};

#[derive(Debug, Clone)]
pub struct DeviceCommand {
    args: Vec<String>,
}

impl CommandKind for DeviceCommand {
    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Command for DeviceCommand {
    fn tag(&self) -> &str {
        "DeviceCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn sample_args(&self) -> Option<&str> {
        Some("emulator-5554")
    }

    /// Asks the executor every time; a device that went away since the last
    /// `!devices` is rejected.
    fn valid_args(&self, ctx: &CommandContext<'_>) -> bool {
        let [device] = self.args.as_slice() else {
            return false;
        };
        match ctx.executor.device_list() {
            Ok(devices) => devices.iter().any(|d| d == device.trim()),
            Err(e) => {
                tracing::warn!("failed to list devices: {}", e);
                false
            }
        }
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let [device] = self.args.as_slice() else {
            tracing::debug!(args = ?self.args, "device not set: expected one argument");
            return Ok(CommandOutput::None);
        };
        let device = device.trim().to_string();
        ctx.say(format!("Setting default device to {device:?}"))?;
        ctx.session.set_default_device(Some(device));
        Ok(CommandOutput::None)
    }
}
