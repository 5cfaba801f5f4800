//! Init command - scaffold a new quilt project
//!
//! Creates the blueprints/ and tasks/ directories with a sample blueprint
//! and task, ready for `quilt validate` and `quilt run --dry-run`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

const SAMPLE_BLUEPRINT: &str = r#"name: Example Blueprint
target: localhost
user: root
vars:
  port: 8080
  app_name: myapp

run:
  - file: example_task.yaml
"#;

const SAMPLE_TASK: &str = r#"steps:
  - name: Example step
    uses: shell
    ensure: present
    with:
      cmd: echo "Hello from {{ vars.app_name }}"
"#;

pub fn execute(project_root: &Path) -> Result<()> {
    let tasks_dir = project_root.join("tasks");
    let blueprints_dir = project_root.join("blueprints");

    fs::create_dir_all(&tasks_dir)
        .with_context(|| format!("Failed to create {}", tasks_dir.display()))?;
    fs::create_dir_all(&blueprints_dir)
        .with_context(|| format!("Failed to create {}", blueprints_dir.display()))?;

    // Existing files are left untouched so re-running init never clobbers edits
    let sample_blueprint = blueprints_dir.join("example.yaml");
    if !sample_blueprint.exists() {
        fs::write(&sample_blueprint, SAMPLE_BLUEPRINT)
            .with_context(|| format!("Failed to write {}", sample_blueprint.display()))?;
    }

    let sample_task = tasks_dir.join("example_task.yaml");
    if !sample_task.exists() {
        fs::write(&sample_task, SAMPLE_TASK)
            .with_context(|| format!("Failed to write {}", sample_task.display()))?;
    }

    println!("{} Project initialized", "✓".green().bold());
    println!("    Created: {}", tasks_dir.display());
    println!("    Created: {}", blueprints_dir.display());
    println!("    Sample blueprint: {}", sample_blueprint.display());
    println!("    Sample task: {}", sample_task.display());

    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Edit the blueprint in blueprints/example.yaml");
    println!("  2. Run: quilt validate blueprints/example.yaml");
    println!("  3. Run: quilt run blueprints/example.yaml --dry-run");

    Ok(())
}
