//! Routine hydration - strict variable substitution over raw document text
//!
//! Hydration happens before YAML parsing because a substituted value may
//! only become valid YAML once it is in place (e.g. a bare number inside a
//! scalar). The blueprint's variables are exposed under a single `vars`
//! binding, so templates write `{{ vars.port }}`; bare names never resolve
//! and cannot collide with document keywords like `name` or `steps`.

use handlebars::{no_escape, Handlebars, RenderError};
use serde::Serialize;
use serde_yaml::Mapping;

/// Template scope handed to the engine: exactly one top-level binding
#[derive(Serialize)]
struct Scope<'a> {
    vars: &'a Mapping,
}

/// Reusable template engine configured for strict, escape-free rendering.
///
/// Strict mode makes any reference to an undefined variable fail the whole
/// render; a partially substituted document is never produced. HTML escaping
/// is disabled because the output is configuration text, not markup.
pub struct Hydrator {
    registry: Handlebars<'static>,
}

impl Hydrator {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        Self { registry }
    }

    /// Render raw routine text against the blueprint's variable map
    pub fn render(&self, source: &str, vars: &Mapping) -> Result<String, RenderError> {
        self.registry.render_template(source, &Scope { vars })
    }
}

impl Default for Hydrator {
    fn default() -> Self {
        Self::new()
    }
}
