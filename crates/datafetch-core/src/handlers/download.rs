use reqwest::header::USER_AGENT;

use super::DatasetContext;
use crate::action::DownloadSpec;
use crate::archive::{self, ArchiveKind};
use crate::error::{FetchError, Result};
use crate::io;

const SPINNER: [char; 4] = ['-', '\\', '|', '/'];

pub fn download(spec: &DownloadSpec, ctx: &mut DatasetContext<'_>) -> Result<()> {
    let file_name = spec.file_name()?;
    let dest = ctx.dir.join(&file_name);

    let response = ctx
        .http
        .get(&spec.url)
        .header(USER_AGENT, ctx.settings.user_agent.as_str())
        .send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: spec.url.clone(),
            status: status.as_u16(),
        });
    }

    let console = &mut *ctx.console;
    let bytes = io::atomic_copy(response, &dest, |chunk| {
        console.spin(format!("Downloading... {}", SPINNER[chunk % SPINNER.len()]))?;
        Ok(())
    })?;
    console.arrow(format!("Downloaded {file_name} ({bytes} bytes)"))?;

    if let Some(kind) = ArchiveKind::detect(&file_name) {
        console.arrow(format!("Unpacking {file_name}..."))?;
        archive::unpack(kind, &dest, ctx.dir)?;
    }
    Ok(())
}
