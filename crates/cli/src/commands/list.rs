use anyhow::Result;
use colored::*;
use runbook_core::manager::RunbookManager;

pub fn execute(manager: &RunbookManager) -> Result<()> {
    let collection = manager.collection();

    let heading = if collection.name.is_empty() {
        "Tasks".to_string()
    } else {
        format!("Tasks — {}", collection.name)
    };
    println!("{}", heading.bold().underline());
    if !collection.description.is_empty() {
        println!("{}", collection.description.dimmed());
    }

    if collection.tasks.is_empty() {
        println!("  {}", "No tasks defined".dimmed());
        return Ok(());
    }

    for task in &collection.tasks {
        let mut flags = Vec::new();
        if task.is_async {
            flags.push("async");
        }
        if task.is_sudo {
            flags.push("sudo");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        println!(
            "{}{} {}",
            task.name.blue().bold(),
            flags.cyan(),
            task.description.dimmed()
        );
    }

    Ok(())
}
