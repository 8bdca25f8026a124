use super::DatasetContext;
use crate::error::Result;
use crate::process;

pub fn command(script: &str, ctx: &mut DatasetContext<'_>) -> Result<()> {
    ctx.console.arrow(format!("Running `{script}`"))?;
    ctx.console.flush()?;
    process::run(process::shell(script), Some(ctx.dir), ctx.settings.strict)?;
    Ok(())
}
