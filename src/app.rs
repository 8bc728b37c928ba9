//! Application entry point: builds the shared context and the task pipeline
//! that turns a set of answers into a ready-to-use project.

use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::config::{InstallCommand, Manifest, Settings};
use crate::copier::{ensure_output_dir, Copier};
use crate::dev_state::save_variables;
use crate::error::{Error, Result};
use crate::ignore::{parse_bisonignore_file, IGNORE_FILE};
use crate::installer::install_dependencies;
use crate::pipeline::{Pipeline, Task};
use crate::renderer::MiniJinjaRenderer;
use crate::report::print_post_install;
use crate::repository::init_repository;
use crate::variables::{value_as_text, Answers, Variables, BISON_VERSION, NAME_KEY};

pub const COPY_FILES: &str = "Copy files";
pub const INSTALL_DEPENDENCIES: &str = "Install dependencies";
pub const GIT_INIT: &str = "Git init";
pub const SAVE_CONFIGURATION: &str = "Save configuration";

/// Everything the tasks share. Built once, read-only afterwards.
#[derive(Debug)]
pub struct Project {
    pub variables: Variables,
    /// Absolute path of the generated project.
    pub target_folder: PathBuf,
    pub template_dir: PathBuf,
    pub manifest: Manifest,
    pub install: InstallCommand,
    pub dev_mode: bool,
    pub force: bool,
}

impl Project {
    pub fn name(&self) -> &str {
        self.variables.name()
    }
}

/// Builds the project context from the answers and the template's manifest.
///
/// The target folder is `<working dir>/<slug>` and is fixed here, before any
/// task runs.
///
/// # Errors
/// * `Error::ValidationError` if `name` is missing or has no usable character
/// * `Error::TemplateDoesNotExistsError` if the template directory is missing
pub fn prepare(answers: &Answers, manifest: Manifest, settings: &Settings) -> Result<Project> {
    if !answers.contains_key(NAME_KEY) {
        return Err(Error::ValidationError("a project name is required".to_string()));
    }

    let variables = Variables::build(answers, BISON_VERSION);
    if variables.name().is_empty() {
        return Err(Error::ValidationError(format!(
            "'{}' cannot be used as a project name",
            answers.get(NAME_KEY).map(value_as_text).unwrap_or_default()
        )));
    }

    if !settings.template_dir.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: settings.template_dir.display().to_string(),
        });
    }

    let working_dir = if settings.working_dir.is_absolute() {
        settings.working_dir.clone()
    } else {
        std::env::current_dir()?.join(&settings.working_dir)
    };
    let target_folder = working_dir.join(variables.name());
    let install = settings.install.clone().unwrap_or_else(|| manifest.install.clone());

    debug!("Generating '{}' into {}", variables.name(), target_folder.display());

    Ok(Project {
        variables,
        target_folder,
        template_dir: settings.template_dir.clone(),
        manifest,
        install,
        dev_mode: settings.dev_mode,
        force: settings.force,
    })
}

/// The four tasks, in their fixed order.
pub fn pipeline() -> Pipeline<Project> {
    Pipeline::new(vec![
        Task::new(COPY_FILES, copy_files),
        Task::new(INSTALL_DEPENDENCIES, |project: &Project| {
            install_dependencies(&project.install, &project.target_folder)
        }),
        Task::new(GIT_INIT, |project: &Project| {
            init_repository(&project.target_folder, &project.variables).map(|_| ())
        }),
        Task::new(SAVE_CONFIGURATION, |project: &Project| {
            save_variables(&project.target_folder, &project.variables).map(|_| ())
        })
        .enabled(|project: &Project| project.dev_mode),
    ])
}

fn copy_files(project: &Project) -> Result<()> {
    let target = ensure_output_dir(&project.target_folder, project.force)?;
    let ignored =
        parse_bisonignore_file(project.template_dir.join(IGNORE_FILE), &project.manifest.ignore)?;
    let renderer = MiniJinjaRenderer::new();

    let written = Copier::new(&renderer, &project.template_dir, &target, &ignored)
        .copy(&project.variables.to_context())?;
    debug!("Copied {} files into {}", written.len(), target.display());
    Ok(())
}

/// Generates a project from `answers`, then writes the post-install message
/// to `out`.
///
/// Returns the first failing task's error; tasks that already ran keep their
/// side effects.
pub fn create_app<W: Write>(
    answers: &Answers,
    manifest: Manifest,
    settings: &Settings,
    out: &mut W,
) -> Result<Project> {
    let project = prepare(answers, manifest, settings)?;
    pipeline().run(&project, &mut *out)?;
    print_post_install(&project.variables, out)?;
    Ok(project)
}

