//! Error handling for create-bison-app.
//! Defines the error type shared by every pipeline task and the CLI layer.

use std::io;
use thiserror::Error;

/// Errors that can occur while scaffolding a new application.
///
/// Every task of the pipeline returns this type; the first error raised by a
/// task aborts the run and is surfaced to the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operations (copy, write, create directory).
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The target folder already exists and contains files.
    #[error("Output directory '{output_dir}' already exists and is not empty. Use --force to write into it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// The template directory could not be found.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Template rendering failures reported by MiniJinja.
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Errors while walking or resolving template paths.
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The external install command could not be spawned or exited with failure.
    #[error("Command '{command}' failed: {message}")]
    ProcessError { command: String, message: String },

    /// Any failure reported by libgit2 while initializing the repository.
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Template manifest parsing or lookup failures.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Invalid answers or project names.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Errors in processing .bisonignore files.
    #[error("BisonIgnore error: {0}.")]
    BisonIgnoreError(String),

    /// Interactive prompt failures.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
