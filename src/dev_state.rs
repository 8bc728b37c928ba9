//! Persistence of the template variables for development of the template.
//!
//! When the tool generates a project while the template itself is being
//! worked on, the variables are saved inside the generated project so the
//! template can be rendered again with the same answers.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::variables::{Answers, Variables};

/// File holding the saved variables, relative to the project root.
pub const DEV_APP_VARIABLES_FILE: &str = ".bison-dev-variables.json";

/// Writes `variables` as indented JSON into `project_dir`.
pub fn save_variables<P: AsRef<Path>>(project_dir: P, variables: &Variables) -> Result<PathBuf> {
    let path = project_dir.as_ref().join(DEV_APP_VARIABLES_FILE);
    let content = serde_json::to_string_pretty(variables)?;
    fs::write(&path, content)?;
    debug!("Saved {} variables to {}", variables.len(), path.display());
    Ok(path)
}

/// Reads a saved variables file back as answers, keeping the key order.
///
/// # Errors
/// * `Error::JsonError` if the file does not hold a JSON object
pub fn load_variables<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}
