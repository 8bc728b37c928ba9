//! Message shown once the project has been generated.

use std::io::Write;

use crate::error::Result;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::variables::Variables;

/// Post-install message template, embedded at build time.
pub const POST_INSTALL_TEMPLATE: &str = include_str!("../assets/post_install.txt.j2");

/// Renders the post-install message with the project variables and the
/// styling filters.
pub fn render_post_install(variables: &Variables) -> Result<String> {
    MiniJinjaRenderer::styled().render(POST_INSTALL_TEMPLATE, &variables.to_context())
}

/// Renders the post-install message and writes it to `out`.
pub fn print_post_install<W: Write>(variables: &Variables, out: &mut W) -> Result<()> {
    let text = render_post_install(variables)?;
    writeln!(out, "{text}")?;
    Ok(())
}
