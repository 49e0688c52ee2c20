use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CommandError;

use super::{Command, CommandContext, CommandKind, CommandOutput};

lazy_static! {
    // Dot-separated ASCII identifier segments: `com.example.app`.
    static ref PACKAGE_NAME: Regex =
        Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").expect("valid package regex");
}

#[derive(Debug, Clone)]
pub struct PackageCommand {
    args: Vec<String>,
}

impl CommandKind for PackageCommand {
    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Command for PackageCommand {
    fn tag(&self) -> &str {
        "PackageCommand"
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn sample_args(&self) -> Option<&str> {
        Some("com.mydomain.mypackage")
    }

    fn valid_args(&self, _ctx: &CommandContext<'_>) -> bool {
        matches!(self.args.as_slice(), [package] if PACKAGE_NAME.is_match(package))
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let [package] = self.args.as_slice() else {
            tracing::debug!(args = ?self.args, "package not set: expected one argument");
            return Ok(CommandOutput::None);
        };
        ctx.say(format!("Setting default package to {package:?}"))?;
        ctx.session.set_default_package(Some(package.clone()));
        Ok(CommandOutput::None)
    }
}
