//! Task loading and lookup utilities
//!
//! This module provides the file loader for task collections and name-based
//! task selection over a loaded collection.

use std::path::Path;

use crate::configs::tasks::{parse_task_collection, Task, TaskCollection};
use crate::types::{RunbookError, RunbookResult};

/// Reads and parses a task definition file. Any read or parse failure is
/// fatal: without a valid collection there is nothing to run.
pub fn load_tasks(path: &Path) -> RunbookResult<TaskCollection> {
    log::info!("loading tasks from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| RunbookError::Load {
        path: path.display().to_string(),
        reason: format!("error reading file: {e}"),
    })?;

    let collection = parse_task_collection(&content).map_err(|e| RunbookError::Load {
        path: path.display().to_string(),
        reason: format!("invalid tasks JSON: {e}"),
    })?;

    log::info!(
        "loaded {} tasks from {}",
        collection.tasks.len(),
        path.display()
    );
    Ok(collection)
}

/// Finds a task by name. Returns the first match in collection order;
/// absence is not an error at this layer.
pub fn find_task<'a>(collection: &'a TaskCollection, name: &str) -> Option<&'a Task> {
    collection.tasks.iter().find(|task| task.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TASKS_JSON: &str = r#"{
        "name": "sample",
        "description": "Sample collection",
        "tasks": [
            {"name": "build", "description": "Compile", "exec": ["make"]},
            {"name": "test", "description": "Run tests", "exec": ["make", "test"], "is_async": true},
            {"name": "build", "description": "Shadowed duplicate", "exec": ["true"]}
        ]
    }"#;

    fn write_tasks_file(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("tasks.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn test_load_tasks_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tasks_file(&dir, TASKS_JSON);

        let collection = load_tasks(&path).unwrap();
        assert_eq!(collection.name, "sample");
        assert_eq!(collection.tasks.len(), 3);
        assert_eq!(collection.tasks[1].name, "test");
    }

    #[test]
    fn test_load_tasks_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_tasks(&path).unwrap_err();
        assert!(matches!(err, RunbookError::Load { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_tasks_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tasks_file(&dir, "{definitely not json");

        let err = load_tasks(&path).unwrap_err();
        assert!(matches!(err, RunbookError::Load { .. }));
    }

    #[test]
    fn test_find_task_first_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tasks_file(&dir, TASKS_JSON);
        let collection = load_tasks(&path).unwrap();

        let task = find_task(&collection, "build").unwrap();
        assert_eq!(task.description, "Compile");

        let task = find_task(&collection, "test").unwrap();
        assert!(task.is_async);
    }

    #[test]
    fn test_find_task_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tasks_file(&dir, TASKS_JSON);
        let collection = load_tasks(&path).unwrap();

        assert!(find_task(&collection, "deploy").is_none());
    }
}
