use std::process::Command;

use super::DatasetContext;
use crate::error::{FetchError, Result};
use crate::process;

/// Show a license and require agreement. A `.txt` payload is a file opened
/// in the pager; anything else is printed as-is.
pub fn license(text: &str, ctx: &mut DatasetContext<'_>) -> Result<()> {
    if text.ends_with(".txt") {
        ctx.console.confirm(format!(
            "You will now see the license of {}. \
             Press [q] to exit the pager program. Press [Return].",
            ctx.name
        ))?;
        if !ctx.console.auto_agree() {
            let mut pager = Command::new(&ctx.settings.pager);
            pager.arg(ctx.base.join(text));
            process::run(pager, None, false)?;
        }
    } else {
        ctx.console.line(text)?;
    }

    let agreed = ctx.console.confirm(format!(
        "Do you agree with this license for {}? [y/N] ",
        ctx.name
    ))?;
    if !agreed {
        return Err(FetchError::LicenseDeclined(ctx.name.to_string()));
    }
    Ok(())
}
