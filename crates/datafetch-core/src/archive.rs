//! Unpacking of downloaded archives.

use std::fs::File;
use std::path::Path;

use crate::error::{FetchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
    Tar,
}

impl ArchiveKind {
    /// Classify a file name by extension. `None` means "not an archive".
    pub fn detect(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else if lower.ends_with(".tar") {
            Some(ArchiveKind::Tar)
        } else {
            None
        }
    }
}

/// Extract `archive` into `dest`. Entries that would land outside `dest`
/// are rejected.
pub fn unpack(kind: ArchiveKind, archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    match kind {
        ArchiveKind::Zip => unpack_zip(file, dest),
        ArchiveKind::TarGz => unpack_tar(flate2::read::GzDecoder::new(file), dest),
        ArchiveKind::Tar => unpack_tar(file, dest),
    }
}

fn unpack_zip(file: File, dest: &Path) -> Result<()> {
    let mut zip = zip::ZipArchive::new(file)?;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            return Err(FetchError::InvalidAction {
                kind: "download".into(),
                reason: format!("archive entry '{}' escapes the target directory", entry.name()),
            });
        };
        let out_path = dest.join(relative);
        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        std::io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

fn unpack_tar<R: std::io::Read>(reader: R, dest: &Path) -> Result<()> {
    let mut archive = tar::Archive::new(reader);
    for entry in archive.entries()? {
        let mut entry = entry?;
        entry.unpack_in(dest)?;
    }
    Ok(())
}
