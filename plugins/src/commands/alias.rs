use replicant_core::api::{
    AliasConfig, Command, CommandContext, CommandError, CommandOutput, DefaultCommand, Registry,
};

/// A `!name` shortcut for a longer adb line, declared in config.
///
/// Runs through the pass-through command, so the default device, the
/// interactive set and package appending all apply to the expanded line.
#[derive(Debug, Clone)]
pub struct AliasCommand {
    name: String,
    command: String,
    args: Vec<String>,
}

impl AliasCommand {
    pub fn new(alias: &AliasConfig, args: Vec<String>) -> Self {
        Self {
            name: alias.name.trim().to_string(),
            command: alias.command.trim().to_string(),
            args,
        }
    }

    pub fn expanded_line(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

impl Command for AliasCommand {
    fn tag(&self) -> &str {
        &self.name
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        DefaultCommand::new(self.expanded_line()).run(ctx)
    }
}

/// Registers every alias; names already taken (built-ins included) are
/// skipped. Returns how many were added.
pub fn register_aliases(registry: &mut Registry, aliases: &[AliasConfig]) -> usize {
    let mut added = 0;
    for alias in aliases {
        let cfg = alias.clone();
        let factory = Box::new(move |args: Vec<String>| -> Box<dyn Command> {
            Box::new(AliasCommand::new(&cfg, args))
        });
        if registry.register_factory(alias.name.trim(), factory) {
            added += 1;
        } else {
            tracing::warn!(alias = %alias.name, "alias clashes with an existing command, ignored");
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use replicant_core::api::{execute, Executor, ExecutorError, Invocation, Outcome, Session};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Invocation>>,
    }

    impl Executor for Recorder {
        fn run_captured(&self, invocation: &Invocation) -> Result<String, ExecutorError> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok("ok\n".to_string())
        }

        fn run_interactive(&self, invocation: &Invocation) -> Result<i32, ExecutorError> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(0)
        }
    }

    fn alias(name: &str, command: &str) -> AliasConfig {
        AliasConfig {
            name: name.to_string(),
            command: command.to_string(),
        }
    }

    #[test]
    fn aliases_are_listed_and_builtins_win() {
        let mut registry = Registry::with_builtins();
        let added = register_aliases(
            &mut registry,
            &[alias("pull-logs", "pull /sdcard/logs"), alias("reset", "reboot")],
        );
        assert_eq!(added, 1);
        assert!(registry.commands().contains(&"!pull-logs".to_string()));

        let reset = registry.load("!reset").unwrap();
        assert!(reset.args().is_empty());
        assert_eq!(reset.name(), "!reset");
    }

    #[test]
    fn alias_forwards_expanded_line_with_session_device() {
        let mut registry = Registry::with_builtins();
        register_aliases(&mut registry, &[alias("pull-logs", "pull /sdcard/logs")]);

        let adb = Recorder::default();
        let mut session = Session::new(false);
        session.set_default_device(Some("emulator-5554".into()));
        let mut out = Vec::new();

        let command = registry.load("!pull-logs ./out").unwrap();
        let mut ctx = CommandContext {
            session: &mut session,
            executor: &adb,
            registry: &registry,
            out: &mut out,
        };
        let outcome = execute(command.as_ref(), &mut ctx).unwrap();

        assert_eq!(
            outcome,
            Outcome::Ran(CommandOutput::Captured("ok\n".to_string()))
        );
        assert_eq!(
            adb.calls.borrow()[0].render(),
            "-s emulator-5554 pull /sdcard/logs ./out"
        );
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }
}
