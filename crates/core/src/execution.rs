//! Task execution module
//!
//! This module handles the actual execution of tasks including queue
//! partitioning, command execution, and bounded concurrent dispatch.

pub mod command;
pub mod queue;
pub mod runner;

pub use command::CommandExecutor;
pub use queue::{partition_tasks, TaskQueues};
pub use runner::{TaskRunner, TaskRunnerConfig, DEFAULT_MAX_CONCURRENT};
