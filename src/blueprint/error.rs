//! Typed compile error model
//!
//! Every compile failure maps to exactly one `CompileError` variant, each
//! tagged with the document that produced it so callers can tell a
//! blueprint-level failure from a routine-level one without re-parsing.
//! No failure is ever downgraded to a warning; the first error aborts the
//! whole compile call.

use std::path::{Path, PathBuf};

use super::schema::SchemaViolation;

/// Which document a compile failure originated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Blueprint { filename: String },
    Routine { filename: String },
}

impl DocumentKind {
    pub fn blueprint(filename: impl Into<String>) -> Self {
        Self::Blueprint {
            filename: filename.into(),
        }
    }

    pub fn routine(filename: impl Into<String>) -> Self {
        Self::Routine {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            Self::Blueprint { filename } | Self::Routine { filename } => filename,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blueprint { filename } => write!(f, "blueprint '{filename}'"),
            Self::Routine { filename } => write!(f, "task file '{filename}'"),
        }
    }
}

/// All possible compile failure modes
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A referenced file does not exist on disk
    #[error("{}", not_found_message(document, path))]
    NotFound {
        document: DocumentKind,
        path: PathBuf,
    },

    /// A file exists but could not be read
    #[error("failed to read {document} at {}: {source}", path.display())]
    Io {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raw text failed to parse as YAML, before or after hydration
    #[error("YAML syntax error in {document}{}: {source}", rendered_suffix(*rendered))]
    Syntax {
        document: DocumentKind,
        rendered: bool,
        #[source]
        source: serde_yaml::Error,
    },

    /// A file parsed successfully but yielded no content
    #[error("{document} is empty{}", rendered_suffix(*rendered))]
    EmptyDocument {
        document: DocumentKind,
        rendered: bool,
    },

    /// Parsed structure failed schema validation
    #[error("grammar error in {document}:\n{}", render_violations(violations))]
    Grammar {
        document: DocumentKind,
        violations: Vec<SchemaViolation>,
    },

    /// A template reference could not be resolved against the variable namespace
    #[error("variable error in {document}: {source}")]
    Variable {
        document: DocumentKind,
        #[source]
        source: handlebars::RenderError,
    },
}

impl CompileError {
    /// The document this failure is tagged with
    pub fn document(&self) -> &DocumentKind {
        match self {
            Self::NotFound { document, .. }
            | Self::Io { document, .. }
            | Self::Syntax { document, .. }
            | Self::EmptyDocument { document, .. }
            | Self::Grammar { document, .. }
            | Self::Variable { document, .. } => document,
        }
    }

    /// Process exit code for the CLI, in the sysexits convention
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 66,
            Self::Io { .. } => 74,
            _ => 65,
        }
    }
}

fn not_found_message(document: &DocumentKind, path: &Path) -> String {
    match document {
        DocumentKind::Blueprint { .. } => format!("Blueprint not found at {}", path.display()),
        DocumentKind::Routine { .. } => format!("Task file missing: {}", path.display()),
    }
}

fn rendered_suffix(rendered: bool) -> &'static str {
    if rendered {
        " after rendering"
    } else {
        ""
    }
}

fn render_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
