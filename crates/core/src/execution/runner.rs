//! Bounded task runner
//!
//! This module coordinates the execution of a whole task collection: the
//! sequential queue runs one task at a time in source order, the async queue
//! runs with a configurable concurrency ceiling. A task failure is recorded
//! in that task's outcome and never aborts its siblings.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

use crate::configs::tasks::{Task, TaskCollection};
use crate::execution::command::CommandExecutor;
use crate::execution::queue::partition_tasks;
use crate::results::{RunReport, TaskOutcome, TaskResult};
use crate::types::RunbookError;

/// Concurrency ceiling applied when the configuration does not supply one.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the task runner
#[derive(Debug, Clone)]
pub struct TaskRunnerConfig {
    /// Maximum number of async tasks in flight at once.
    pub max_concurrent: usize,
}

impl Default for TaskRunnerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

/// Runs tasks to their terminal state and aggregates the outcomes.
#[derive(Debug)]
pub struct TaskRunner {
    max_concurrent: usize,
}

impl TaskRunner {
    pub fn new(config: TaskRunnerConfig) -> Self {
        // A zero-capacity admission gate could never admit a task; normalize
        // to the default so the gate always has finite non-zero capacity.
        let max_concurrent = if config.max_concurrent == 0 {
            DEFAULT_MAX_CONCURRENT
        } else {
            config.max_concurrent
        };
        Self { max_concurrent }
    }

    /// Runs one task to its terminal state. Errors are folded into the
    /// outcome; the result is present even on failure, carrying the error
    /// text and any captured output as diagnostics.
    pub async fn run_task(&self, task: &Task) -> TaskOutcome {
        log::info!("running task '{}'", task.name);

        match CommandExecutor::new(task).execute().await {
            Ok(output) => {
                log::info!("task '{}' completed", task.name);
                let retained = if task.is_print_output {
                    output
                } else {
                    String::new()
                };
                TaskOutcome {
                    result: TaskResult::new(task, retained),
                    error: None,
                }
            }
            Err(error) => {
                log::error!("task '{}' failed: {}", task.name, error);
                let diagnostic = match &error {
                    RunbookError::TaskExecution { output, .. } if !output.is_empty() => {
                        format!("{error}\n{output}")
                    }
                    _ => error.to_string(),
                };
                TaskOutcome {
                    result: TaskResult::new(task, diagnostic),
                    error: Some(error),
                }
            }
        }
    }

    /// Partitions the collection and runs both queues to completion. The
    /// run is complete only when every task has a terminal outcome; the
    /// report carries them all and leaves pass/fail policy to the caller.
    pub async fn run_collection(&self, collection: &TaskCollection) -> RunReport {
        let queues = partition_tasks(collection);

        let sequential = self.run_sequential(&queues.sequential_tasks).await;
        let concurrent = self.run_async(&queues.async_tasks).await;

        RunReport {
            sequential,
            concurrent,
        }
    }

    /// Strict source order, each task fully complete before the next starts.
    async fn run_sequential(&self, tasks: &[&Task]) -> Vec<TaskOutcome> {
        let mut outcomes = Vec::with_capacity(tasks.len());
        for &task in tasks {
            outcomes.push(self.run_task(task).await);
        }
        outcomes
    }

    /// At most `max_concurrent` tasks in flight; start and completion order
    /// are otherwise unspecified. Outcomes land in per-index slots so no
    /// lock is needed and the returned order matches the queue order.
    async fn run_async(&self, tasks: &[&Task]) -> Vec<TaskOutcome> {
        let gate = Arc::new(Semaphore::new(self.max_concurrent));

        let mut in_flight: FuturesUnordered<_> = tasks
            .iter()
            .enumerate()
            .map(|(index, &task)| {
                let gate = Arc::clone(&gate);
                async move {
                    let _permit = match gate.acquire().await {
                        Ok(permit) => permit,
                        Err(closed) => {
                            // The gate is never closed while tasks run;
                            // fold the impossible case instead of panicking.
                            return (index, self.gate_closed_outcome(task, &closed));
                        }
                    };
                    (index, self.run_task(task).await)
                }
            })
            .collect();

        let mut slots: Vec<Option<TaskOutcome>> = Vec::new();
        slots.resize_with(tasks.len(), || None);
        while let Some((index, outcome)) = in_flight.next().await {
            slots[index] = Some(outcome);
        }

        // Every index was written exactly once before the stream drained.
        slots.into_iter().flatten().collect()
    }

    fn gate_closed_outcome(
        &self,
        task: &Task,
        closed: &tokio::sync::AcquireError,
    ) -> TaskOutcome {
        let error = RunbookError::TaskExecution {
            task: task.name.clone(),
            reason: format!("admission gate closed: {closed}"),
            output: String::new(),
        };
        TaskOutcome {
            result: TaskResult::new(task, error.to_string()),
            error: Some(error),
        }
    }
}
