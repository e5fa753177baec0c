use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::RunbookResult;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(default)]
pub struct Task {
    pub name: String,
    pub description: String,
    /// Program followed by its arguments. An empty list is accepted here and
    /// rejected at execution time.
    pub exec: Vec<String>,
    /// Place the task on the concurrent queue instead of the sequential one.
    pub is_async: bool,
    /// Launch through `sudo`, passing the whole `exec` list as its arguments.
    pub is_sudo: bool,
    /// Keep the captured output in the result on success. Output is always
    /// captured for failure diagnostics regardless of this flag.
    pub is_print_output: bool,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(default)]
pub struct TaskCollection {
    pub name: String,
    pub description: String,
    pub tasks: Vec<Task>,
}

pub fn parse_task_collection(json_str: &str) -> RunbookResult<TaskCollection> {
    let collection: TaskCollection = serde_json::from_str(json_str)?;
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_collection() {
        let json = r#"{
            "name": "deploy",
            "description": "Deployment tasks",
            "tasks": [
                {
                    "name": "build",
                    "description": "Compile the project",
                    "exec": ["make", "build"],
                    "is_async": false,
                    "is_sudo": false,
                    "is_print_output": true
                },
                {
                    "name": "restart",
                    "exec": ["systemctl", "restart", "app"],
                    "is_async": true,
                    "is_sudo": true
                }
            ]
        }"#;

        let collection = parse_task_collection(json).unwrap();
        assert_eq!(collection.name, "deploy");
        assert_eq!(collection.tasks.len(), 2);
        assert_eq!(collection.tasks[0].exec, vec!["make", "build"]);
        assert!(collection.tasks[0].is_print_output);
        assert!(collection.tasks[1].is_async);
        assert!(collection.tasks[1].is_sudo);
    }

    #[test]
    fn test_absent_fields_take_zero_values() {
        let json = r#"{"tasks": [{"name": "noop"}]}"#;

        let collection = parse_task_collection(json).unwrap();
        assert_eq!(collection.name, "");
        assert_eq!(collection.description, "");
        let task = &collection.tasks[0];
        assert_eq!(task.name, "noop");
        assert!(task.exec.is_empty());
        assert!(!task.is_async);
        assert!(!task.is_sudo);
        assert!(!task.is_print_output);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"name": "x", "tasks": [], "schedule": "nightly"}"#;

        let collection = parse_task_collection(json).unwrap();
        assert_eq!(collection.name, "x");
        assert!(collection.tasks.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_task_collection("{not json").is_err());
        assert!(parse_task_collection(r#"{"tasks": "nope"}"#).is_err());
    }
}
