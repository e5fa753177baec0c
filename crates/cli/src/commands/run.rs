use anyhow::Result;
use colored::*;
use runbook_core::manager::RunbookManager;

pub async fn execute(manager: &RunbookManager, name: &str) -> Result<()> {
    println!("{} {}", "Running task".bold(), name.cyan());

    let outcome = manager
        .run_task(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run task: {}", e))?;

    if !outcome.result.output.is_empty() {
        println!("{}", outcome.result.output);
    }

    match outcome.error {
        None => {
            println!(
                "{} {}",
                "✓".green().bold(),
                format!("Task '{}' completed successfully", name).green().bold()
            );
            Ok(())
        }
        Some(error) => Err(anyhow::anyhow!("{}", error)),
    }
}
