//! Runs the external dependency installer inside the generated project.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::config::InstallCommand;
use crate::error::{Error, Result};

/// Runs `command` with `project_dir` as its working directory.
///
/// The directory is passed explicitly, the process's own current directory
/// plays no part. Output is captured and only surfaced on failure.
///
/// # Errors
/// * `Error::ProcessError` if the program cannot be spawned or exits with a
///   non-zero status
pub fn install_dependencies<P: AsRef<Path>>(command: &InstallCommand, project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    debug!("Running '{}' in {}", command, project_dir.display());

    let output = Command::new(&command.program)
        .args(&command.args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::ProcessError { command: command.to_string(), message: e.to_string() })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };

        return Err(Error::ProcessError {
            command: command.to_string(),
            message: if diagnostics.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}\n{}", output.status, diagnostics)
            },
        });
    }

    Ok(())
}
