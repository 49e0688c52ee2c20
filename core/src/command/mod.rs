//! The command contract and the built-in commands.
//!
//! A command is built per dispatched line, executed once through [`execute`],
//! then dropped. Everything it may touch (session, executor, registry, output)
//! arrives through [`CommandContext`].

mod default;
mod device;
mod devices;
mod list;
mod package;
mod reset;

use std::io::Write;

pub use default::DefaultCommand;
pub use device::DeviceCommand;
pub use devices::DevicesCommand;
pub use list::ListCommand;
pub use package::PackageCommand;
pub use reset::ResetCommand;

use crate::error::CommandError;
use crate::executor::Executor;
use crate::input::SENTINEL;
use crate::registry::Registry;
use crate::session::Session;

pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub executor: &'a dyn Executor,
    pub registry: &'a Registry,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    /// Writes one line of user-visible output.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), CommandError> {
        writeln!(self.out, "{}", line.as_ref()).map_err(CommandError::Output)
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    None,
    /// Stdout of a detached adb run.
    Captured(String),
    /// Exit code of an adb run attached to the terminal.
    Attached(i32),
    Devices(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ran(CommandOutput),
    /// Arguments were rejected; nothing ran and the usage hint was printed.
    Invalid { usage: String },
}

pub trait Command {
    /// Type tag the canonical name is derived from, e.g. `PackageCommand`.
    fn tag(&self) -> &str;

    fn args(&self) -> &[String];

    fn name(&self) -> String {
        canonical_name(self.tag())
    }

    fn sample_args(&self) -> Option<&str> {
        None
    }

    fn valid_args(&self, _ctx: &CommandContext<'_>) -> bool {
        true
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError>;

    fn usage(&self) -> String {
        match self.sample_args() {
            Some(sample) => format!("{} {}", self.name(), sample),
            None => self.name(),
        }
    }
}

/// A command type the registry can construct from parsed args.
pub trait CommandKind: Command + Sized + 'static {
    fn from_args(args: Vec<String>) -> Self;
}

/// Validates, then runs. Invalid arguments are reported on the context output
/// and are not an error.
pub fn execute(
    command: &dyn Command,
    ctx: &mut CommandContext<'_>,
) -> Result<Outcome, CommandError> {
    if !command.valid_args(ctx) {
        let usage = command.usage();
        tracing::debug!(command = %command.name(), args = ?command.args(), "invalid arguments");
        ctx.say(format!("Invalid arguments. Ex.: {usage}"))?;
        return Ok(Outcome::Invalid { usage });
    }

    tracing::debug!(command = %command.name(), args = ?command.args(), "running command");
    command.run(ctx).map(Outcome::Ran)
}

/// `PackageCommand` -> `!package`.
pub fn canonical_name(tag: &str) -> String {
    let base = tag.strip_suffix("Command").unwrap_or(tag);
    format!("{SENTINEL}{}", base.to_lowercase())
}
