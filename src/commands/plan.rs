//! Plan command - print the compiled execution plan

use std::path::Path;

use anyhow::{Context, Result};

use super::common::{print_breakdown, print_summary, report_failure};
use crate::blueprint::BlueprintCompiler;

pub fn execute(blueprint: &str, project_root: &Path, json: bool) -> Result<()> {
    let compiler = BlueprintCompiler::new(project_root);
    let plan = match compiler.compile(blueprint) {
        Ok(plan) => plan,
        Err(err) => report_failure(&err),
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&plan).context("Failed to serialize plan as JSON")?;
        println!("{rendered}");
    } else {
        print_summary(&plan);
        print_breakdown(&plan);
    }

    Ok(())
}
