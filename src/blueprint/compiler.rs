//! Blueprint compiler - turns a blueprint and its routine files into an
//! execution plan
//!
//! The pipeline is all-or-nothing: the first failure aborts the whole
//! compile call and no partial plan is ever returned.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::error::{CompileError, DocumentKind};
use super::schema::{validate_blueprint, validate_routine, Routine, Step};
use super::template::Hydrator;

/// Blueprint metadata copied verbatim into the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanMeta {
    pub name: String,
    pub target: String,
    pub user: String,
}

/// One resolved task: a routine's steps plus its run-list bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedTask {
    pub source_file: String,
    /// Unevaluated `when` expression, passed through for the executor
    pub condition: Option<String>,
    pub steps: Vec<Step>,
}

/// The compiler's sole output: a flat, fully resolved list of tasks in
/// run-list order, ready to hand to an executor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionPlan {
    pub meta: PlanMeta,
    pub tasks: Vec<PlannedTask>,
}

/// Compiles blueprint files from a fixed project root.
///
/// The project root also fixes the `tasks/` subdirectory used to resolve
/// every routine file; that layout is part of the format contract, not
/// configurable per call. The compiler holds no per-document state, so one
/// instance can compile any number of blueprints.
pub struct BlueprintCompiler {
    root: PathBuf,
    tasks_dir: PathBuf,
    hydrator: Hydrator,
}

impl BlueprintCompiler {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let root = project_root.into();
        let tasks_dir = root.join("tasks");
        Self {
            root,
            tasks_dir,
            hydrator: Hydrator::new(),
        }
    }

    /// Compile a blueprint into an execution plan.
    ///
    /// Loads and validates the blueprint, then loads, hydrates and validates
    /// each routine in run-list order. Every failure is terminal; there are
    /// no retries and no best-effort plans.
    pub fn compile(&self, filename: &str) -> Result<ExecutionPlan, CompileError> {
        let document = DocumentKind::blueprint(filename);
        let path = self.root.join(filename);

        let content = fs::read_to_string(&path).map_err(|e| read_error(&document, &path, e))?;

        let raw: Value = serde_yaml::from_str(&content).map_err(|e| CompileError::Syntax {
            document: document.clone(),
            rendered: false,
            source: e,
        })?;

        if raw.is_null() {
            return Err(CompileError::EmptyDocument {
                document,
                rendered: false,
            });
        }

        let blueprint = validate_blueprint(raw).map_err(|violations| CompileError::Grammar {
            document: document.clone(),
            violations,
        })?;

        debug!(
            blueprint = %blueprint.name,
            tasks = blueprint.run.len(),
            "blueprint validated"
        );

        let mut tasks = Vec::with_capacity(blueprint.run.len());
        for task_ref in &blueprint.run {
            let routine = self.load_routine(&task_ref.file, &blueprint.vars)?;
            debug!(
                task = %task_ref.file,
                steps = routine.steps.len(),
                "routine hydrated"
            );
            tasks.push(PlannedTask {
                source_file: task_ref.file.clone(),
                condition: task_ref.when.clone(),
                steps: routine.steps,
            });
        }

        Ok(ExecutionPlan {
            meta: PlanMeta {
                name: blueprint.name,
                target: blueprint.target,
                user: blueprint.user,
            },
            tasks,
        })
    }

    /// Load a routine file, hydrate it against the blueprint's variables,
    /// then parse and validate the rendered text.
    ///
    /// The existence check runs before any templating so a missing file is
    /// reported as such, never as a template or syntax failure.
    fn load_routine(&self, filename: &str, vars: &Mapping) -> Result<Routine, CompileError> {
        let document = DocumentKind::routine(filename);
        let path = self.tasks_dir.join(filename);

        if !path.exists() {
            return Err(CompileError::NotFound { document, path });
        }

        let raw_text = fs::read_to_string(&path).map_err(|e| read_error(&document, &path, e))?;

        let rendered =
            self.hydrator
                .render(&raw_text, vars)
                .map_err(|e| CompileError::Variable {
                    document: document.clone(),
                    source: e,
                })?;

        let raw: Value = serde_yaml::from_str(&rendered).map_err(|e| CompileError::Syntax {
            document: document.clone(),
            rendered: true,
            source: e,
        })?;

        if raw.is_null() {
            return Err(CompileError::EmptyDocument {
                document,
                rendered: true,
            });
        }

        validate_routine(raw).map_err(|violations| CompileError::Grammar {
            document,
            violations,
        })
    }
}

fn read_error(document: &DocumentKind, path: &std::path::Path, e: std::io::Error) -> CompileError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CompileError::NotFound {
            document: document.clone(),
            path: path.to_path_buf(),
        }
    } else {
        CompileError::Io {
            document: document.clone(),
            path: path.to_path_buf(),
            source: e,
        }
    }
}
