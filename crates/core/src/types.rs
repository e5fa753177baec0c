use thiserror::Error;

/// The main error type for runbook operations
#[derive(Debug, Error)]
pub enum RunbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tasks file could not be read or parsed. Fatal to the whole run:
    /// without a valid collection there is nothing to execute.
    #[error("failed to load tasks from {path}: {reason}")]
    Load { path: String, reason: String },

    /// The task definition cannot be executed at all, for example an empty
    /// `exec` list. Detected before any process is spawned.
    #[error("task '{task}' cannot be executed: {reason}")]
    TaskConfig { task: String, reason: String },

    /// The process failed to start or exited with a non-zero status.
    #[error("task '{task}' failed: {reason}")]
    TaskExecution {
        task: String,
        reason: String,
        /// Combined output captured before the failure, kept for diagnosis.
        output: String,
    },

    #[error("task '{0}' not found")]
    TaskNotFound(String),
}

/// Result type alias for runbook operations
pub type RunbookResult<T> = Result<T, RunbookError>;
