//! High-level runbook management interface
//!
//! This module provides the [`RunbookManager`] which serves as the primary
//! interface for callers. It encapsulates settings resolution, task file
//! loading, name-based task selection, and collection execution.
//!
//! ## Example
//!
//! ```rust,no_run
//! use runbook_core::manager::{RunbookManager, RunbookManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> runbook_core::types::RunbookResult<()> {
//! let manager = RunbookManager::new(RunbookManagerConfig {
//!     tasks_path: PathBuf::from("tasks.json"),
//!     max_concurrent: None,
//! })?;
//!
//! // Run one task by name
//! let outcome = manager.run_task("build").await?;
//!
//! // Run the whole collection
//! let report = manager.run_all().await;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::configs::settings::Settings;
use crate::configs::tasks::{Task, TaskCollection};
use crate::execution::runner::{TaskRunner, TaskRunnerConfig};
use crate::results::{RunReport, TaskOutcome};
use crate::tasks::{find_task, load_tasks};
use crate::types::{RunbookError, RunbookResult};

/// Configuration for initializing a runbook manager
pub struct RunbookManagerConfig {
    /// Path to the task definition file.
    pub tasks_path: PathBuf,
    /// Concurrency ceiling override; when absent the settings file (or its
    /// built-in default) decides.
    pub max_concurrent: Option<usize>,
}

/// High-level manager that owns the loaded collection and the runner.
#[derive(Debug)]
pub struct RunbookManager {
    collection: TaskCollection,
    runner: TaskRunner,
}

impl RunbookManager {
    /// Resolves settings and loads the task collection. A missing or
    /// unparseable task file is fatal here, before anything executes.
    pub fn new(config: RunbookManagerConfig) -> RunbookResult<Self> {
        let settings = Settings::load()?;
        let collection = load_tasks(&config.tasks_path)?;

        let max_concurrent = config
            .max_concurrent
            .unwrap_or_else(|| settings.max_concurrent());
        let runner = TaskRunner::new(TaskRunnerConfig { max_concurrent });

        Ok(Self { collection, runner })
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    pub fn find_task(&self, name: &str) -> Option<&Task> {
        find_task(&self.collection, name)
    }

    /// Runs a single task selected by name. Unlike the core lookup, absence
    /// is an error at this layer: the caller asked for a specific task.
    pub async fn run_task(&self, name: &str) -> RunbookResult<TaskOutcome> {
        let task = self
            .find_task(name)
            .ok_or_else(|| RunbookError::TaskNotFound(name.to_string()))?;
        Ok(self.runner.run_task(task).await)
    }

    /// Runs the whole collection, sequential queue then async queue.
    pub async fn run_all(&self) -> RunReport {
        self.runner.run_collection(&self.collection).await
    }
}
