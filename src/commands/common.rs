//! Shared output helpers for CLI commands

use colored::Colorize;

use crate::blueprint::{CompileError, ExecutionPlan};

/// Print a compile failure and exit with the error's code
pub fn report_failure(err: &CompileError) -> ! {
    eprintln!("{} {err}", "✗".red().bold());
    std::process::exit(err.exit_code());
}

/// Print the one-line-per-field plan summary
pub fn print_summary(plan: &ExecutionPlan) {
    println!(
        "{} Blueprint compiled: {}",
        "✓".green().bold(),
        plan.meta.name.cyan()
    );
    println!("    Target: {}", plan.meta.target);
    println!("    User: {}", plan.meta.user);
    println!(
        "    Tasks: {} task{}",
        plan.tasks.len(),
        if plan.tasks.len() == 1 { "" } else { "s" }
    );
}

/// Print the full task/step breakdown of a plan
pub fn print_breakdown(plan: &ExecutionPlan) {
    for (idx, task) in plan.tasks.iter().enumerate() {
        println!();
        println!(
            "  {} {}",
            format!("Task {}:", idx + 1).bold(),
            task.source_file.cyan()
        );
        if let Some(condition) = &task.condition {
            println!("    Condition: {}", condition.dimmed());
        }
        println!(
            "    Steps: {} step{}",
            task.steps.len(),
            if task.steps.len() == 1 { "" } else { "s" }
        );
        for (step_idx, step) in task.steps.iter().enumerate() {
            println!(
                "      {}. {} {}",
                step_idx + 1,
                step.name,
                format!("(uses: {})", step.uses).dimmed()
            );
        }
    }
}
