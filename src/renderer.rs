//! Template rendering for file paths, file contents and console messages.
//! Wraps a MiniJinja environment with case-conversion filters and,
//! optionally, terminal styling filters.
use crate::error::{Error, Result};
use colored::Colorize;
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the case-conversion filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        env.add_filter("snake_case", |value: String| value.to_snake_case());
        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("screaming_snake_case", |value: String| {
            value.to_screaming_snake_case()
        });
        env.add_filter("title_case", |value: String| value.to_title_case());

        Self { env }
    }

    /// Creates a renderer that also knows the terminal styling filters used
    /// by console messages (`bold`, `cyan`, ...).
    pub fn styled() -> Self {
        let mut renderer = Self::new();
        let env = &mut renderer.env;

        env.add_filter("bold", |value: String| value.bold().to_string());
        env.add_filter("dim", |value: String| value.dimmed().to_string());
        env.add_filter("underline", |value: String| value.underline().to_string());
        env.add_filter("red", |value: String| value.red().to_string());
        env.add_filter("green", |value: String| value.green().to_string());
        env.add_filter("yellow", |value: String| value.yellow().to_string());
        env.add_filter("blue", |value: String| value.blue().to_string());
        env.add_filter("magenta", |value: String| value.magenta().to_string());
        env.add_filter("cyan", |value: String| value.cyan().to_string());

        renderer
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
