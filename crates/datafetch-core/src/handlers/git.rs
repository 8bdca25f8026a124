use std::process::Command;

use super::DatasetContext;
use crate::action::GitSpec;
use crate::error::Result;
use crate::process;
use crate::requirements::GIT;

/// Replace the working directory with a fresh clone, then pin it to the
/// requested commit if there is one.
pub fn clone(spec: &GitSpec, ctx: &mut DatasetContext<'_>) -> Result<()> {
    ctx.console.arrow(format!("Cloning {}", spec.url))?;
    ctx.console.flush()?;

    // `git clone` refuses a non-empty target.
    std::fs::remove_dir_all(ctx.dir)?;

    let mut clone = Command::new(GIT);
    clone.arg("clone").arg(&spec.url).arg(ctx.dir);
    process::run(clone, None, ctx.settings.strict)?;

    if let Some(commit) = &spec.commit {
        ctx.console.arrow(format!("Checking out {commit}"))?;
        ctx.console.flush()?;
        let mut checkout = Command::new(GIT);
        checkout.args(["checkout", commit.as_str()]);
        process::run(checkout, Some(ctx.dir), ctx.settings.strict)?;
    }
    Ok(())
}
