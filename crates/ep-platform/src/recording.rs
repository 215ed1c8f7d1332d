//! Recording [`CommandRunner`] for adapter tests.
//!
//! Built for this crate's own tests and, with the `testing` feature, for
//! downstream crates that wire adapters in their tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::runner::{CommandError, CommandOutput, CommandRunner, CommandSpec};

/// Test-double runner that records command lines and returns configured
/// responses, defaulting to an empty success.
#[derive(Default)]
pub struct RecordingRunner {
    responses: Mutex<HashMap<String, Result<CommandOutput, CommandError>>>,
    commands: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to the exact command line `command` (program and args joined
    /// by spaces) with `response`, every time it runs.
    pub fn on(self, command: &str, response: Result<CommandOutput, CommandError>) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(command.to_string(), response);
        }
        self
    }

    /// Failure with exit status `code`, as a non-zero exiting tool reports it.
    pub fn exit(command: &str, code: i32) -> Result<CommandOutput, CommandError> {
        Err(CommandError::Failed {
            command: command.to_string(),
            code: Some(code),
            stderr: String::new(),
        })
    }

    pub fn executed(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|c| c.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    pub fn executed_specs(&self) -> Vec<CommandSpec> {
        self.commands.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let line = spec.to_string();
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(spec.clone());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|responses| responses.get(&line).cloned())
            .unwrap_or_else(|| Ok(CommandOutput::default()))
    }
}
