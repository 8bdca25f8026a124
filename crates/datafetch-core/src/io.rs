use crate::error::Result;
use std::io::Read;
use std::path::Path;
use tempfile::NamedTempFile;

/// Stream `reader` into `path` through a tempfile in the same directory.
///
/// `on_chunk` is called once per chunk read, after it has been written.
/// A failed or interrupted copy never leaves a partial file at `path`.
pub fn atomic_copy<R: Read>(
    mut reader: R,
    path: &Path,
    mut on_chunk: impl FnMut(usize) -> Result<()>,
) -> Result<u64> {
    use std::io::Write as _;
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    let mut buf = [0u8; 8192];
    let mut total = 0u64;
    let mut index = 0usize;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        tmp.write_all(&buf[..n])?;
        total += n as u64;
        on_chunk(index)?;
        index += 1;
    }
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(total)
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// True when `path` is a directory with no entries.
pub fn is_empty_dir(path: &Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}

/// Recursively remove `path`, swallowing any error.
pub fn remove_dir_quiet(path: &Path) {
    if let Err(e) = std::fs::remove_dir_all(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove directory");
        }
    }
}
