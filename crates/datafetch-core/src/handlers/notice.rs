use super::DatasetContext;
use crate::error::Result;

pub fn message(text: &str, ctx: &mut DatasetContext<'_>) -> Result<()> {
    ctx.console.arrow(format!("Message from {}:", ctx.name))?;
    ctx.console.line(text)?;
    Ok(())
}

pub fn cite(text: &str, ctx: &mut DatasetContext<'_>) -> Result<()> {
    ctx.console
        .arrow(format!("If using {}, please cite:\n", ctx.name))?;
    ctx.console.line(text)?;
    Ok(())
}

pub fn unknown(kind: &str, ctx: &mut DatasetContext<'_>) -> Result<()> {
    tracing::warn!(dataset = ctx.name, kind, "unknown action");
    ctx.console.arrow(format!("Unknown action called {kind}"))?;
    Ok(())
}
