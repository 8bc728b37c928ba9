//! Configuration handling for create-bison-app.
//! Loads the optional template manifest (bison.json, bison.yml, bison.yaml)
//! and holds the runtime settings injected by the CLI.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported manifest file names, in lookup order.
pub const CONFIG_FILES: [&str; 3] = ["bison.json", "bison.yml", "bison.yaml"];

/// Name of the template directory shipped with the tool.
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Kind of value a question produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ValueType {
    #[default]
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "bool")]
    Bool,
}

/// An extra question asked before the project is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub choices: Vec<String>,
    /// Regular expression a text answer must match.
    #[serde(default)]
    pub validation: Option<String>,
}

/// External command that installs the generated project's dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self::new("yarn", &["install", "-s"])
    }
}

impl std::fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Template manifest read from the template root.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub questions: IndexMap<String, Question>,
    #[serde(default)]
    pub install: InstallCommand,
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Parses manifest content, trying JSON first and YAML second.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    match serde_json::from_str(content) {
        Ok(manifest) => Ok(manifest),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid manifest format: {e}"))),
    }
}

/// Loads the manifest from a template directory.
///
/// The first existing file of [`CONFIG_FILES`] wins. A template without a
/// manifest gets the default one.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if `template_dir` is not a directory
/// * `Error::ConfigError` if the manifest cannot be parsed
pub fn load_manifest<P: AsRef<Path>>(template_dir: P) -> Result<Manifest> {
    if !template_dir.as_ref().is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: template_dir.as_ref().display().to_string(),
        });
    }

    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading manifest from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_manifest(&content);
        }
    }

    debug!("No manifest found in {}", template_dir.as_ref().display());
    Ok(Manifest::default())
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Template tree rendered into the new project.
    pub template_dir: PathBuf,
    /// Directory the target folder is created in.
    pub working_dir: PathBuf,
    /// Persist the variables for later re-rendering of the template.
    pub dev_mode: bool,
    /// Write into a non-empty target folder.
    pub force: bool,
    /// Overrides the manifest's install command.
    pub install: Option<InstallCommand>,
}

impl Settings {
    /// Settings rooted at the current directory with the default template.
    pub fn new() -> Result<Self> {
        Ok(Self {
            template_dir: default_template_dir(),
            working_dir: std::env::current_dir()?,
            dev_mode: false,
            force: false,
            install: None,
        })
    }
}

/// Template directory used when none is given on the command line.
///
/// A `template` directory next to the executable takes precedence over the
/// one shipped in this repository.
pub fn default_template_dir() -> PathBuf {
    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR_NAME)));

    match installed {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME),
    }
}
