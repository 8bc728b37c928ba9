//! File and directory ignore pattern handling for templates.
//! Processes the template's .bisonignore file and the manifest's `ignore`
//! list into a single glob set, similar to .gitignore functionality.

use crate::config::CONFIG_FILES;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Name of the ignore file looked up at the template root.
pub const IGNORE_FILE: &str = ".bisonignore";

/// Patterns that are never copied into a generated project.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", ".git", ".git/**"];

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern).map_err(|e| {
        Error::BisonIgnoreError(format!("invalid pattern '{pattern}': {e}"))
    })?;
    builder.add(glob);
    Ok(())
}

/// Builds the set of ignored paths for a template.
///
/// # Arguments
/// * `bisonignore_path` - Path to the .bisonignore file, which may not exist
/// * `extra_patterns` - Additional patterns, usually from the template manifest
///
/// # Notes
/// - Default patterns, the manifest files and the ignore file itself are always included
/// - Blank lines and lines starting with `#` are skipped
/// - Invalid patterns result in a `BisonIgnoreError`
pub fn parse_bisonignore_file<P: AsRef<Path>>(
    bisonignore_path: P,
    extra_patterns: &[String],
) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS.iter().chain(CONFIG_FILES.iter()) {
        add_pattern(&mut builder, pattern)?;
    }
    add_pattern(&mut builder, IGNORE_FILE)?;

    if let Ok(contents) = read_to_string(bisonignore_path.as_ref()) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            add_pattern(&mut builder, line)?;
        }
    } else {
        debug!("{IGNORE_FILE} does not exist");
    }

    for pattern in extra_patterns {
        add_pattern(&mut builder, pattern)?;
    }

    builder
        .build()
        .map_err(|e| Error::BisonIgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}
