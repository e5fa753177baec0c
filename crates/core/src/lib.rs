//! Runbook Core Library
//!
//! This is the core library for the runbook task runner. It provides the
//! task data model, queue partitioning, and the bounded-concurrency
//! execution engine that launches tasks as external processes.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`manager`] - High-level runbook management interface
//! - [`execution`] - Queue partitioning, process launching, and the bounded runner
//! - [`tasks`] - Task file loading and name-based lookup
//! - [`configs`] - Configuration parsing for task collections and settings
//! - [`results`] - Result types for task executions
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`RunbookManager`] which loads a task
//! collection and runs it:
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
//! let report = manager.run_all().await;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod manager;
pub mod results;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use manager::{RunbookManager, RunbookManagerConfig};
pub use types::{RunbookError, RunbookResult};
