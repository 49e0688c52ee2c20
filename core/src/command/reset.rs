use crate::error::CommandError;

use super::{Command, CommandContext, CommandKind, CommandOutput};

#[derive(Debug, Clone)]
pub struct ResetCommand {
    args: Vec<String>,
}

impl CommandKind for ResetCommand {
    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Command for ResetCommand {
    fn tag(&self) -> &str {
        "ResetCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn valid_args(&self, _ctx: &CommandContext<'_>) -> bool {
        self.args.is_empty()
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        ctx.session.clear();
        Ok(CommandOutput::None)
    }
}
