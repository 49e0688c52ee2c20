use crate::error::CommandError;
use crate::executor::Invocation;

use super::{Command, CommandContext, CommandKind, CommandOutput};

/// adb subcommands that take over the terminal until the user interrupts them.
const INTERACTIVE: &[&str] = &["logcat", "shell"];

/// adb subcommands that act on a package; the session's default package is
/// appended when the user gives none.
const PACKAGE_DEPENDENT: &[&str] = &["uninstall"];

/// Pass-through: forwards the whole line to adb.
#[derive(Debug, Clone)]
pub struct DefaultCommand {
    args: Vec<String>,
}

impl DefaultCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            args: vec![line.into()],
        }
    }

    pub fn line(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Builds the invocation for the current session defaults.
    pub fn invocation(&self, ctx: &CommandContext<'_>) -> Invocation {
        let mut invocation =
            Invocation::new(self.line()).on_device(ctx.session.default_device());

        if is_package_dependent(self.line()) {
            if let Some(package) = ctx.session.default_package() {
                invocation = invocation.arg(package);
            }
        }
        invocation
    }

    /// The detached path: runs the line and returns stdout without printing it.
    pub fn capture(&self, ctx: &CommandContext<'_>) -> Result<String, CommandError> {
        let invocation = self.invocation(ctx);
        tracing::debug!(target: "replicant.adb", args = %invocation.render(), "captured run");
        Ok(ctx.executor.run_captured(&invocation)?)
    }
}

impl CommandKind for DefaultCommand {
    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Command for DefaultCommand {
    fn tag(&self) -> &str {
        "DefaultCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        if is_interactive(self.line()) {
            let invocation = self.invocation(ctx);
            tracing::debug!(target: "replicant.adb", args = %invocation.render(), "attached run");
            let code = ctx.executor.run_interactive(&invocation)?;
            return Ok(CommandOutput::Attached(code));
        }

        let output = self.capture(ctx)?;
        let shown = output.trim_end_matches(['\r', '\n']);
        if !shown.is_empty() {
            ctx.say(shown)?;
        }
        Ok(CommandOutput::Captured(output))
    }
}

fn is_interactive(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|name| INTERACTIVE.contains(&name))
}

// Only the bare command: `uninstall com.other` already names its package.
fn is_package_dependent(line: &str) -> bool {
    PACKAGE_DEPENDENT.contains(&line.trim())
}
