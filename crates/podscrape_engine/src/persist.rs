use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use scrape_logging::scrape_debug;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot use {path:?} as output directory: {reason}")]
    OutputDir { path: PathBuf, reason: String },
    #[error("output path has no file name: {0:?}")]
    NoFileName(PathBuf),
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let failed = |reason: String| PersistError::OutputDir {
        path: dir.to_path_buf(),
        reason,
    };
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(failed("not a directory".to_string())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| failed(e.to_string()))
        }
        Err(err) => Err(failed(err.to_string())),
    }
}

/// Replace the file at `path` with `content`. The data goes to a temp file in
/// the same directory first and is renamed over the target.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<PathBuf, PersistError> {
    if path.file_name().is_none() {
        return Err(PersistError::NoFileName(path.to_path_buf()));
    }
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_output_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;

    scrape_debug!("Wrote {} byte(s) to {}", content.len(), path.display());
    Ok(path.to_path_buf())
}

/// Save `value` as 2-space indented UTF-8 JSON at `path`, keeping non-ASCII
/// characters as-is. Missing parent directories are created.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, PersistError> {
    let content = serde_json::to_string_pretty(value)?;
    write_atomic(path, content.as_bytes())
}
