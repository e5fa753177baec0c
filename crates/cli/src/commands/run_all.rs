use anyhow::Result;
use colored::*;
use runbook_core::manager::RunbookManager;

pub async fn execute(manager: &RunbookManager) -> Result<()> {
    let collection = manager.collection();
    println!(
        "{} {}",
        "Running collection".bold(),
        collection.name.cyan()
    );
    println!();

    let report = manager.run_all().await;

    for outcome in report.outcomes() {
        if outcome.is_success() {
            println!("{} {}", "✓".green().bold(), outcome.result.name.green());
        } else {
            println!("{} {}", "✗".red().bold(), outcome.result.name.red());
        }
        if !outcome.result.output.is_empty() {
            println!("{}", outcome.result.output);
        }
    }

    println!();
    let failed = report.failure_count();
    if failed == 0 {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("All {} tasks completed successfully!", report.total())
                .green()
                .bold()
        );
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} of {} tasks failed",
            failed,
            report.total()
        ))
    }
}
