//! Blueprint compilation
//!
//! This module handles:
//! - Validating blueprint and routine documents against their schemas
//! - Hydrating routine files with the blueprint's global variables
//! - Assembling the flat execution plan handed to the executor

pub mod compiler;
pub mod error;
pub mod schema;
pub mod template;

// Re-export commonly used types
pub use compiler::{BlueprintCompiler, ExecutionPlan, PlanMeta, PlannedTask};
pub use error::{CompileError, DocumentKind};
pub use schema::{
    validate_blueprint, validate_routine, Blueprint, Routine, SchemaViolation, Step, TaskRef,
};
pub use template::Hydrator;
