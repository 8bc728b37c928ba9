//! Materializes the template tree into the target folder.
//! Paths are rendered as templates; files with a `.j2` double extension are
//! rendered, every other file is copied verbatim.

use globset::GlobSet;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// Suffix marking a file whose content is a template.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Makes sure the target folder can be written to and creates it.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the folder exists, is not empty and
///   `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force && fs::read_dir(output_dir)?.next().is_some() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    fs::create_dir_all(output_dir)?;
    Ok(output_dir.to_path_buf())
}

/// Checks if a file name has a double extension ending in `.j2`.
pub fn is_jinja_template(filename: &str) -> bool {
    let parts: Vec<&str> = filename.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&"j2")
}

/// Resolves where a rendered template path lands in the target folder.
///
/// # Returns
/// * `(PathBuf, bool)` - Target path and whether the content must be rendered
pub fn resolve_target_path<P: AsRef<Path>>(rendered_path: &str, target_dir: P) -> (PathBuf, bool) {
    let target_dir = target_dir.as_ref();
    let rendered = Path::new(rendered_path);

    match rendered.file_name().and_then(|n| n.to_str()) {
        Some(filename) if is_jinja_template(filename) => {
            let stripped = filename.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(filename);
            (target_dir.join(rendered.with_file_name(stripped)), true)
        }
        _ => (target_dir.join(rendered), false),
    }
}

/// A rendered path is valid when it is relative and every segment names an
/// entry below the target folder: no empty, `.` or `..` segment.
pub fn is_rendered_path_valid(rendered_path: &str) -> bool {
    !rendered_path.is_empty()
        && !rendered_path.starts_with('/')
        && !rendered_path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
}

/// Copies the template tree into the target folder.
pub struct Copier<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    target_root: &'a Path,
    ignored: &'a GlobSet,
}

impl<'a> Copier<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        target_root: &'a Path,
        ignored: &'a GlobSet,
    ) -> Self {
        Self { renderer, template_root, target_root, ignored }
    }

    /// Walks the template and writes every entry. Returns the files written.
    ///
    /// The first error aborts the copy; files already written stay in place.
    pub fn copy(&self, context: &serde_json::Value) -> Result<Vec<PathBuf>> {
        if !self.template_root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: self.template_root.display().to_string(),
            });
        }

        let mut written = Vec::new();
        let walker = WalkDir::new(self.template_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for dir_entry in walker {
            let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if let Some(target) = self.copy_entry(entry.path(), entry.file_type().is_dir(), context)? {
                written.push(target);
            }
        }
        Ok(written)
    }

    /// Template-relative path with `/` separators.
    fn relative_path(&self, source: &Path) -> Result<String> {
        let relative = source
            .strip_prefix(self.template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative = relative.to_str().ok_or_else(|| {
            Error::TemplateError(format!("non UTF-8 path: {}", relative.display()))
        })?;
        Ok(relative.replace('\\', "/"))
    }

    /// Ignored directories are pruned together with their content.
    fn is_ignored(&self, source: &Path) -> bool {
        match self.relative_path(source) {
            Ok(relative) if self.ignored.is_match(&relative) => {
                debug!("Skipping '{relative}' (ignored)");
                true
            }
            _ => false,
        }
    }

    fn copy_entry(
        &self,
        source: &Path,
        is_dir: bool,
        context: &serde_json::Value,
    ) -> Result<Option<PathBuf>> {
        let relative = self.relative_path(source)?;

        let rendered = self.renderer.render(&relative, context)?;
        if rendered.trim().is_empty() {
            debug!("Skipping '{relative}' (rendered path is empty)");
            return Ok(None);
        }
        if !is_rendered_path_valid(&rendered) {
            warn!("Skipping '{relative}': rendered path '{rendered}' is invalid");
            return Ok(None);
        }

        let (target, render_content) = resolve_target_path(&rendered, self.target_root);

        if is_dir {
            debug!("Creating directory: {}", target.display());
            fs::create_dir_all(&target)?;
            return Ok(None);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if render_content {
            debug!("Writing file: {}", target.display());
            let content = fs::read_to_string(source)?;
            let rendered_content = self.renderer.render(&content, context)?;
            fs::write(&target, rendered_content)?;
        } else {
            debug!("Copying file: {}", target.display());
            fs::copy(source, &target)?;
        }

        Ok(Some(target))
    }
}
