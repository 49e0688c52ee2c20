use crate::error::CommandError;

use super::{Command, CommandContext, CommandKind, CommandOutput};

/// Prints every registered `!` command, one per line.
#[derive(Debug, Clone)]
pub struct ListCommand {
    args: Vec<String>,
}

impl CommandKind for ListCommand {
    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn tag(&self) -> &str {
        "ListCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn valid_args(&self, _ctx: &CommandContext<'_>) -> bool {
        self.args.is_empty()
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let listing = ctx.registry.commands().join("\n");
        ctx.say(listing)?;
        Ok(CommandOutput::None)
    }
}
