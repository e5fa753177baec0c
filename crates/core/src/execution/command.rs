//! Command execution utilities
//!
//! This module launches the external process behind a single task, with
//! consistent error handling and output capture.

use std::process::Stdio;

use tokio::process::Command;

use crate::configs::tasks::Task;
use crate::types::{RunbookError, RunbookResult};

/// Executor for one task's external command.
pub struct CommandExecutor<'a> {
    task: &'a Task,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    /// Runs the task's command to completion and returns the combined stdout
    /// and stderr. Waits without a timeout, so a hung child hangs its caller.
    pub async fn execute(&self) -> RunbookResult<String> {
        if self.task.exec.is_empty() {
            log::error!("task '{}' has an empty exec command", self.task.name);
            return Err(RunbookError::TaskConfig {
                task: self.task.name.clone(),
                reason: "empty exec command".to_string(),
            });
        }

        log::debug!(
            "executing task '{}': sudo={} exec={:?}",
            self.task.name,
            self.task.is_sudo,
            self.task.exec
        );

        let child = self
            .build_command()
            .spawn()
            .map_err(|e| RunbookError::TaskExecution {
                task: self.task.name.clone(),
                reason: format!("failed to start '{}': {}", self.task.exec[0], e),
                output: String::new(),
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| RunbookError::TaskExecution {
                task: self.task.name.clone(),
                reason: format!("failed to collect output: {e}"),
                output: String::new(),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            let reason = match output.status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            log::error!("task '{}' failed: {}", self.task.name, reason);
            return Err(RunbookError::TaskExecution {
                task: self.task.name.clone(),
                reason,
                output: combined,
            });
        }

        Ok(combined)
    }

    /// Only valid for a non-empty `exec`; `execute` checks that first.
    fn build_command(&self) -> Command {
        let mut command = if self.task.is_sudo {
            let mut cmd = Command::new("sudo");
            cmd.args(&self.task.exec);
            cmd
        } else {
            let mut cmd = Command::new(&self.task.exec[0]);
            cmd.args(&self.task.exec[1..]);
            cmd
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}
