use std::io::Write;

use replicant_core::api::{
    self as core_api, AppConfig, CliError, CommandContext, CommandError, Executor, Outcome,
    Registry, Session,
};
use replicant_plugins::factory;

/// Everything one REPL session needs: the registry built at startup, the
/// session defaults and the executor.
pub struct App {
    session: Session,
    registry: Registry,
    executor: Box<dyn Executor>,
}

impl App {
    pub fn new(cfg: &AppConfig) -> Result<Self, CliError> {
        let executor = factory::build_executor(cfg).map_err(|e| CliError::Setup(format!("{e:#}")))?;
        let registry = factory::build_registry(cfg);
        let session = Session::from_config(&cfg.session);
        tracing::info!(
            commands = ?registry.commands(),
            device = ?session.default_device(),
            package = ?session.default_package(),
            "replicant ready"
        );
        Ok(Self::with_parts(session, registry, executor))
    }

    pub fn with_parts(session: Session, registry: Registry, executor: Box<dyn Executor>) -> Self {
        Self {
            session,
            registry,
            executor,
        }
    }

    /// Resolves and executes one line. `Ok(None)` means the line did not
    /// resolve to a command (blank, or an unknown `!name`) and nothing ran.
    pub fn dispatch(
        &mut self,
        line: &str,
        out: &mut dyn Write,
    ) -> Result<Option<Outcome>, CommandError> {
        let Some(command) = self.registry.load(line) else {
            return Ok(None);
        };
        let mut ctx = CommandContext {
            session: &mut self.session,
            executor: self.executor.as_ref(),
            registry: &self.registry,
            out,
        };
        core_api::execute(command.as_ref(), &mut ctx).map(Some)
    }

    /// `adb -s emulator-5554 (com.example)> `
    pub fn prompt(&self) -> String {
        let mut prompt = String::from("adb");
        if let Some(device) = self.session.default_device() {
            prompt.push_str(" -s ");
            prompt.push_str(device);
        }
        if let Some(package) = self.session.default_package() {
            prompt.push_str(" (");
            prompt.push_str(package);
            prompt.push(')');
        }
        prompt.push_str("> ");
        prompt
    }
}
