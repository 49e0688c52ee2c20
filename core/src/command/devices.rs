use crate::error::CommandError;
use crate::executor::{parse_device_list, Invocation};

use super::{Command, CommandContext, CommandKind, CommandOutput};

/// Lists attached devices. Whatever the user typed after `!devices` is
/// ignored; the forwarded adb command is always `devices`.
#[derive(Debug, Clone)]
pub struct DevicesCommand {
    args: Vec<String>,
}

impl CommandKind for DevicesCommand {
    fn from_args(_args: Vec<String>) -> Self {
        Self {
            args: vec!["devices".to_string()],
        }
    }
}

impl Command for DevicesCommand {
    fn tag(&self) -> &str {
        "DevicesCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let raw = ctx.executor.run_captured(&Invocation::new("devices"))?;
        let shown = raw.trim_end_matches(['\r', '\n']);
        if !shown.is_empty() {
            ctx.say(shown)?;
        }

        let devices = parse_device_list(&raw);
        if ctx.session.debug() {
            ctx.say(format!("{devices:?}"))?;
        }
        Ok(CommandOutput::Devices(devices))
    }
}
