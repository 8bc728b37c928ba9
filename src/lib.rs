//! create-bison-app scaffolds a new application from the Bison template.
//! It renders the template into a new folder, installs dependencies and
//! records everything as the first commit of a fresh git repository.

/// Invocation contract and the task pipeline of the generator
pub mod app;

/// Command-line interface module
pub mod cli;

/// Template manifest (bison.json, bison.yml, bison.yaml) and runtime settings
pub mod config;

/// Template tree rendering into the target folder
pub mod copier;

/// Saved variables for re-rendering the template during its development
pub mod dev_state;

/// Error types and handling
pub mod error;

/// File and directory ignore patterns
/// Processes .bisonignore files to exclude specific paths
pub mod ignore;

/// External dependency installer
pub mod installer;

/// Answer collection from files, stdin, flags and prompts
pub mod parser;

/// Ordered task runner with per-task states
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// Renderer for paths, file contents and console messages
pub mod renderer;

/// Post-install message
pub mod report;

/// Git repository initialization
pub mod repository;

/// Project name normalization
pub mod slug;

/// Variables shared by every task
pub mod variables;
