//! Shared test fixtures: a fake adb that records every invocation.
#![allow(dead_code)]

use std::cell::RefCell;

use replicant_core::api::{
    execute, Command, CommandContext, CommandError, CommandOutput, Executor, ExecutorError,
    Invocation, Outcome, Registry, Session,
};

pub const DEVICES_OUTPUT: &str =
    "List of devices attached\nemulator-5554 device\nemulator-5556 device\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Captured,
    Interactive,
}

#[derive(Default)]
pub struct FakeAdb {
    devices_output: RefCell<String>,
    captured_output: RefCell<String>,
    exit_code: i32,
    calls: RefCell<Vec<(Mode, Invocation)>>,
}

impl FakeAdb {
    pub fn new() -> Self {
        Self {
            devices_output: RefCell::new(DEVICES_OUTPUT.to_string()),
            ..Self::default()
        }
    }

    pub fn with_output(self, output: &str) -> Self {
        *self.captured_output.borrow_mut() = output.to_string();
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn set_devices_output(&self, raw: &str) {
        *self.devices_output.borrow_mut() = raw.to_string();
    }

    pub fn calls(&self) -> Vec<(Mode, Invocation)> {
        self.calls.borrow().clone()
    }

    /// Calls other than the `devices` queries made by validation.
    pub fn forwarded(&self) -> Vec<(Mode, Invocation)> {
        self.calls()
            .into_iter()
            .filter(|(_, inv)| inv.line != "devices")
            .collect()
    }
}

impl Executor for FakeAdb {
    fn run_captured(&self, invocation: &Invocation) -> Result<String, ExecutorError> {
        self.calls
            .borrow_mut()
            .push((Mode::Captured, invocation.clone()));
        if invocation.line == "devices" {
            return Ok(self.devices_output.borrow().clone());
        }
        Ok(self.captured_output.borrow().clone())
    }

    fn run_interactive(&self, invocation: &Invocation) -> Result<i32, ExecutorError> {
        self.calls
            .borrow_mut()
            .push((Mode::Interactive, invocation.clone()));
        Ok(self.exit_code)
    }
}

/// An executor whose adb binary cannot be started.
pub struct MissingAdb;

impl Executor for MissingAdb {
    fn run_captured(&self, _invocation: &Invocation) -> Result<String, ExecutorError> {
        Err(spawn_error())
    }

    fn run_interactive(&self, _invocation: &Invocation) -> Result<i32, ExecutorError> {
        Err(spawn_error())
    }
}

fn spawn_error() -> ExecutorError {
    ExecutorError::Spawn {
        program: "adb".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "adb not found"),
    }
}

pub struct Harness<E: Executor = FakeAdb> {
    pub registry: Registry,
    pub session: Session,
    pub adb: E,
    pub out: Vec<u8>,
}

impl Harness<FakeAdb> {
    pub fn new() -> Self {
        Self::with_executor(FakeAdb::new())
    }
}

impl<E: Executor> Harness<E> {
    pub fn with_executor(adb: E) -> Self {
        Self {
            registry: Registry::with_builtins(),
            session: Session::new(false),
            adb,
            out: Vec::new(),
        }
    }

    /// Dispatches one line the way the REPL does. `None` when the line did not
    /// resolve to a command.
    pub fn dispatch(&mut self, line: &str) -> Option<Result<Outcome, CommandError>> {
        let command = self.registry.load(line)?;
        let mut ctx = CommandContext {
            session: &mut self.session,
            executor: &self.adb,
            registry: &self.registry,
            out: &mut self.out,
        };
        Some(execute(command.as_ref(), &mut ctx))
    }

    /// Calls `run` directly, skipping argument validation.
    pub fn run(&mut self, command: &dyn Command) -> Result<CommandOutput, CommandError> {
        let mut ctx = CommandContext {
            session: &mut self.session,
            executor: &self.adb,
            registry: &self.registry,
            out: &mut self.out,
        };
        command.run(&mut ctx)
    }

    pub fn valid(&mut self, line: &str) -> bool {
        let command = self.registry.load(line).expect("line resolves to a command");
        let ctx = CommandContext {
            session: &mut self.session,
            executor: &self.adb,
            registry: &self.registry,
            out: &mut self.out,
        };
        command.valid_args(&ctx)
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}
