//! Blueprint and routine schema definitions and validation

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A single atomic unit of work within a routine.
///
/// Maps directly to an executor module (`uses`) and its arguments. The
/// compiler never interprets `uses` or `ensure`; both are opaque tokens
/// passed through to the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub uses: String,
    #[serde(default = "default_ensure")]
    pub ensure: String,
    /// Module arguments. Keyed as `with` in the YAML documents; `with` is a
    /// reserved word in Rust, so the field is renamed at the serde boundary.
    #[serde(default, rename = "with")]
    pub args: Mapping,
}

/// A task file: an ordered list of steps and nothing else.
///
/// A routine with zero steps is valid. A file that parses to nothing is
/// not a routine at all; the compiler reports that before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub steps: Vec<Step>,
}

/// One entry in a blueprint's `run` list.
///
/// `file` is resolved against the project's `tasks/` directory. `when` is an
/// unevaluated condition string, carried verbatim into the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRef {
    pub file: String,
    #[serde(default)]
    pub when: Option<String>,
}

/// The root provisioning document.
///
/// Defines the target environment, the global variable namespace visible to
/// every routine during hydration, and the ordered run list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    pub target: String,
    pub user: String,
    #[serde(default)]
    pub vars: Mapping,
    pub run: Vec<TaskRef>,
}

fn default_ensure() -> String {
    "present".to_string()
}

/// A single schema constraint violation with field context
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaViolation {
    pub message: String,
    pub path: Option<String>,
}

impl SchemaViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Validate a parsed document as a blueprint.
///
/// Structural failures (missing fields, wrong types) surface as the single
/// violation serde reports, with its field path. Value-level constraints
/// found after conversion are aggregated in one pass. The `name`, `target`
/// and `user` fields are required but free-form; only `run[].file` carries a
/// value constraint, since an empty string cannot name a task file.
pub fn validate_blueprint(raw: Value) -> Result<Blueprint, Vec<SchemaViolation>> {
    if !raw.is_mapping() {
        return Err(vec![SchemaViolation::new(
            "expected a mapping at the document root",
        )]);
    }

    let blueprint: Blueprint =
        serde_yaml::from_value(raw).map_err(|e| vec![SchemaViolation::new(e.to_string())])?;

    let mut violations = Vec::new();

    for (idx, task_ref) in blueprint.run.iter().enumerate() {
        if task_ref.file.trim().is_empty() {
            violations.push(SchemaViolation::at(
                format!("run[{idx}].file"),
                "task file name cannot be empty",
            ));
        }
    }

    if violations.is_empty() {
        Ok(blueprint)
    } else {
        Err(violations)
    }
}

/// Validate a parsed document as a routine
pub fn validate_routine(raw: Value) -> Result<Routine, Vec<SchemaViolation>> {
    if !raw.is_mapping() {
        return Err(vec![SchemaViolation::new(
            "expected a mapping at the document root",
        )]);
    }

    let routine: Routine =
        serde_yaml::from_value(raw).map_err(|e| vec![SchemaViolation::new(e.to_string())])?;

    let mut violations = Vec::new();

    for (idx, step) in routine.steps.iter().enumerate() {
        require_non_empty(&step.name, &format!("steps[{idx}].name"), &mut violations);
        require_non_empty(&step.uses, &format!("steps[{idx}].uses"), &mut violations);
    }

    if violations.is_empty() {
        Ok(routine)
    } else {
        Err(violations)
    }
}

fn require_non_empty(value: &str, path: &str, violations: &mut Vec<SchemaViolation>) {
    if value.trim().is_empty() {
        violations.push(SchemaViolation::at(path, "cannot be empty"));
    }
}
