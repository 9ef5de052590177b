//! Template rendering for the generator, backed by MiniJinja.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Compiles `template` under `name` and renders it with `context`.
    ///
    /// # Errors
    /// * `Error::TemplateParse` if the template has invalid syntax
    /// * `Error::Render` if rendering fails, e.g. on an undefined placeholder
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that rejects undefined placeholders and keeps the
    /// template's trailing newline.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())
            .map_err(|source| Error::TemplateParse { name: name.to_string(), source })?;

        let tmpl = env
            .get_template(name)
            .map_err(|source| Error::TemplateParse { name: name.to_string(), source })?;

        tmpl.render(context).map_err(|source| Error::Render { name: name.to_string(), source })
    }
}
