//! Run command - compile a blueprint and (eventually) execute its plan
//!
//! Execution against a target host is not implemented yet; the command
//! compiles the blueprint and, in dry-run mode, prints the resolved plan.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::common::{print_breakdown, print_summary, report_failure};
use crate::blueprint::BlueprintCompiler;

pub fn execute(blueprint: &str, project_root: &Path, dry_run: bool, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Loading blueprint: {}", "→".cyan().bold(), blueprint);
    }

    let compiler = BlueprintCompiler::new(project_root);
    let plan = match compiler.compile(blueprint) {
        Ok(plan) => plan,
        Err(err) => report_failure(&err),
    };

    if verbose || dry_run {
        print_summary(&plan);
    }

    if dry_run {
        println!();
        println!(
            "{} Dry run mode - no tasks will be executed",
            "→".cyan().bold()
        );
        print_breakdown(&plan);
    } else {
        println!();
        println!("{} Execution not yet implemented", "→".cyan().bold());
        println!("    Use --dry-run to inspect the compiled plan");
    }

    Ok(())
}
