//! Pre-flight check for the external executables the runner shells out to.

use crate::error::{FetchError, Result};

pub const GIT: &str = "git";

/// Verify that `git` and `pager` are on `PATH`, in that order.
pub fn check_requirements(pager: &str) -> Result<()> {
    require(GIT, git_hint(std::env::consts::OS))?;
    require(pager, pager_hint(pager, std::env::consts::OS))?;
    Ok(())
}

fn require(name: &str, hint: String) -> Result<()> {
    match which::which(name) {
        Ok(path) => {
            tracing::debug!(name, path = %path.display(), "found executable");
            Ok(())
        }
        Err(_) => Err(FetchError::MissingExecutable {
            name: name.to_string(),
            hint,
        }),
    }
}

fn git_hint(os: &str) -> String {
    match os {
        "macos" => "Install it with: brew install git".to_string(),
        "linux" => "Install it with: sudo apt-get install git".to_string(),
        _ => "Consult your administrator on how to install git".to_string(),
    }
}

fn pager_hint(pager: &str, os: &str) -> String {
    match os {
        "windows" => "We suggest installing the Windows Subsystem for Linux: \
                      https://docs.microsoft.com/windows/wsl/"
            .to_string(),
        "macos" => format!("Install it with: brew install {pager}"),
        "linux" => format!("Install it with: sudo apt-get install {pager}"),
        _ => format!("Consult your administrator on how to install {pager}"),
    }
}
