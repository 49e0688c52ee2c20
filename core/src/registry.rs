//! Name → factory table for `!` commands, and the dispatcher that turns a raw
//! line into a command.

use std::collections::BTreeMap;

use crate::command::{
    canonical_name, Command, CommandKind, DefaultCommand, DeviceCommand, DevicesCommand,
    ListCommand, PackageCommand, ResetCommand,
};
use crate::input::{parse_line, ParsedInput};

pub type CommandFactory = Box<dyn Fn(Vec<String>) -> Box<dyn Command>>;

/// Filled once at startup, read-only afterwards. The pass-through command is
/// never stored here; [`Registry::load`] falls back to it directly.
#[derive(Default)]
pub struct Registry {
    factories: BTreeMap<String, CommandFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in commands.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<DevicesCommand>();
        registry.register::<PackageCommand>();
        registry.register::<DeviceCommand>();
        registry.register::<ResetCommand>();
        registry.register::<ListCommand>();
        registry
    }

    /// Registers `K` under its canonical name. Returns `false` (and keeps the
    /// existing entry) when the name is already taken.
    pub fn register<K: CommandKind>(&mut self) -> bool {
        let name = K::from_args(Vec::new()).name();
        self.insert(
            name,
            Box::new(|args: Vec<String>| Box::new(K::from_args(args)) as Box<dyn Command>),
        )
    }

    /// Registers a command that is not known at compile time (config aliases,
    /// plugins). `name` is normalised the same way as built-in tags.
    pub fn register_factory(&mut self, name: &str, factory: CommandFactory) -> bool {
        self.insert(canonical_name(name), factory)
    }

    fn insert(&mut self, name: String, factory: CommandFactory) -> bool {
        if self.factories.contains_key(&name) {
            tracing::debug!(target: "replicant.registry", command = %name, "already registered");
            return false;
        }
        tracing::debug!(target: "replicant.registry", command = %name, "registered");
        self.factories.insert(name, factory);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Sorted canonical names, e.g. `["!device", "!devices", "!list", ...]`.
    pub fn commands(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Resolves a raw line.
    ///
    /// `!name args...` builds the registered command, or returns `None` when
    /// nothing is registered under that name. Any other non-blank line becomes
    /// the pass-through command. Blank lines return `None`.
    pub fn load(&self, raw: &str) -> Option<Box<dyn Command>> {
        match parse_line(raw)? {
            ParsedInput::Custom { name, args } => {
                let key = canonical_name(&name);
                let Some(factory) = self.factories.get(&key) else {
                    tracing::debug!(target: "replicant.registry", command = %key, "unknown command ignored");
                    return None;
                };
                Some(factory(args))
            }
            ParsedInput::PassThrough(line) => Some(Box::new(DefaultCommand::new(line))),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands())
            .finish()
    }
}
