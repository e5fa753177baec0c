//! Result types for task execution
//!
//! This module contains all result types returned by runner operations,
//! providing a centralized location for output structures.

use serde::Serialize;
use uuid::Uuid;

use crate::configs::tasks::Task;
use crate::types::RunbookError;

/// Execution record for one task, in the shape it is reported and serialized.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    /// Unique per execution, not per task: running the same task twice
    /// yields two distinct ids.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Retained combined output. Empty on success unless the task asked for
    /// its output to be kept; diagnostic output on failure.
    pub output: String,
}

impl TaskResult {
    pub fn new(task: &Task, output: String) -> Self {
        TaskResult {
            id: Uuid::new_v4().to_string(),
            name: task.name.clone(),
            description: task.description.clone(),
            output,
        }
    }
}

/// Terminal state of one submitted task. Every task handed to the runner
/// produces exactly one outcome; the result is present even on failure,
/// carrying whatever output was captured before the task failed.
#[derive(Debug)]
pub struct TaskOutcome {
    pub result: TaskResult,
    pub error: Option<RunbookError>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate outcome of running a whole collection, split by queue.
/// Sequential outcomes are in source order; concurrent outcomes are in the
/// async queue's source order regardless of completion order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sequential: Vec<TaskOutcome>,
    pub concurrent: Vec<TaskOutcome>,
}

impl RunReport {
    /// All outcomes, sequential first.
    pub fn outcomes(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.sequential.iter().chain(self.concurrent.iter())
    }

    pub fn total(&self) -> usize {
        self.sequential.len() + self.concurrent.len()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes().filter(|o| !o.is_success()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            name: "build".to_string(),
            description: "Compile".to_string(),
            exec: vec!["make".to_string()],
            ..Task::default()
        }
    }

    #[test]
    fn test_result_ids_are_unique_per_execution() {
        let task = sample_task();
        let first = TaskResult::new(&task, String::new());
        let second = TaskResult::new(&task, String::new());
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn test_report_counts() {
        let task = sample_task();
        let ok = TaskOutcome {
            result: TaskResult::new(&task, String::new()),
            error: None,
        };
        let failed = TaskOutcome {
            result: TaskResult::new(&task, "boom".to_string()),
            error: Some(RunbookError::TaskExecution {
                task: task.name.clone(),
                reason: "exit status 1".to_string(),
                output: "boom".to_string(),
            }),
        };

        let report = RunReport {
            sequential: vec![ok],
            concurrent: vec![failed],
        };
        assert_eq!(report.total(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.is_success());
        assert_eq!(report.outcomes().count(), 2);
    }
}
