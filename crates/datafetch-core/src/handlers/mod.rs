//! One handler per action kind.

mod command;
mod download;
mod git;
mod license;
mod notice;

use std::path::Path;

use crate::action::Action;
use crate::console::Console;
use crate::error::Result;
use crate::manifest::Settings;

/// Everything a handler may touch while working on one dataset.
pub struct DatasetContext<'a> {
    pub name: &'a str,
    /// The dataset's working directory.
    pub dir: &'a Path,
    /// Directory relative paths in the manifest are resolved against.
    pub base: &'a Path,
    pub settings: &'a Settings,
    pub http: &'a reqwest::blocking::Client,
    pub console: &'a mut Console,
}

pub fn execute(action: &Action, ctx: &mut DatasetContext<'_>) -> Result<()> {
    tracing::debug!(dataset = ctx.name, kind = action.kind(), "dispatching action");
    match action {
        Action::Download(spec) => download::download(spec, ctx),
        Action::Git(spec) => git::clone(spec, ctx),
        Action::Command(script) => command::command(script, ctx),
        Action::License(text) => license::license(text, ctx),
        Action::Message(text) => notice::message(text, ctx),
        Action::Cite(text) => notice::cite(text, ctx),
        Action::Unknown { kind } => notice::unknown(kind, ctx),
    }
}
