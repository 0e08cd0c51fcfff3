//! External tool resolution and checked invocation.
//!
//! Every invocation is exit-code checked: a spawn failure and a non-zero
//! exit are distinct errors, and either one halts the signing pipeline.

use crate::packager::error::{Error, Result};
use std::path::PathBuf;
use tokio::process::Command;

/// Resolves a tool on PATH.
///
/// Missing tools are reported as [`Error::ToolNotFound`] so the diagnostic
/// says what to install rather than surfacing a spawn failure later.
pub fn resolve(tool: &str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {tool} at: {}", path.display());
            Ok(path)
        }
        Err(_) => Err(Error::ToolNotFound(tool.to_string())),
    }
}

/// Runs a prepared command to completion and returns its captured stdout.
///
/// `command` names the invocation in diagnostics (e.g. "xar sign"). A
/// non-zero exit yields [`Error::CommandStatus`] with the exit code and
/// captured stderr.
pub async fn run_checked(command: &str, cmd: &mut Command) -> Result<Vec<u8>> {
    let output = cmd.output().await.map_err(|e| Error::CommandFailed {
        command: command.to_string(),
        source: e,
    })?;

    if !output.status.success() {
        return Err(Error::CommandStatus {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}
