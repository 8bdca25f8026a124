//! Subprocess helpers for the `command` and `git` actions.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{FetchError, Result};

/// Build a shell invocation of `script` for the host platform.
pub fn shell(script: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", script]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", script]);
        cmd
    }
}

/// Run `cmd` to completion with inherited stdio, optionally inside `cwd`.
///
/// A spawn failure is always an error. A non-zero exit is an error only when
/// `strict` is set; otherwise it is logged and tolerated.
pub fn run(mut cmd: Command, cwd: Option<&Path>, strict: bool) -> Result<ExitStatus> {
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let shown = describe(&cmd);
    tracing::debug!(command = %shown, "spawning");
    let status = cmd.status()?;

    if !status.success() {
        if strict {
            return Err(FetchError::CommandFailed {
                command: shown,
                status: status.to_string(),
            });
        }
        tracing::warn!(command = %shown, %status, "command exited unsuccessfully");
    }
    Ok(status)
}

fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
