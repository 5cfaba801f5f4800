//! Validate command - compile a blueprint and report, without executing

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::common::report_failure;
use crate::blueprint::BlueprintCompiler;

pub fn execute(blueprint: &str, project_root: &Path) -> Result<()> {
    let compiler = BlueprintCompiler::new(project_root);
    let plan = match compiler.compile(blueprint) {
        Ok(plan) => plan,
        Err(err) => report_failure(&err),
    };

    println!(
        "{} Blueprint is valid: {}",
        "✓".green().bold(),
        plan.meta.name.cyan()
    );
    println!("    Target: {}", plan.meta.target);
    println!("    User: {}", plan.meta.user);
    println!(
        "    Tasks: {} task{} found",
        plan.tasks.len(),
        if plan.tasks.len() == 1 { "" } else { "s" }
    );

    for (idx, task) in plan.tasks.iter().enumerate() {
        println!(
            "      {}. {} ({} step{})",
            idx + 1,
            task.source_file,
            task.steps.len(),
            if task.steps.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
