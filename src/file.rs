// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    path::Path,
};

use tracing::debug;

use crate::error::PersistenceError;
use crate::record::{Fondo, Layout};

/// Write one record as row `id`.
///
/// With `file_has_header == false` the file is created (or truncated) and the
/// header goes in first; otherwise the row is appended. The file is opened and
/// closed on every call so rows already written survive a crash.
pub fn append_record(
    path: &Path,
    record: &Fondo,
    id: usize,
    file_has_header: bool,
    layout: Layout,
) -> Result<(), PersistenceError> {
    let file = if file_has_header {
        open_append(path)?
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        File::create(path).map_err(|source| io_err(path, source))?
    };

    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_has_header {
        out.write_record(layout.headers())
            .map_err(|source| csv_err(path, source))?;
    }
    out.write_record(record.to_row(id, layout))
        .map_err(|source| csv_err(path, source))?;
    out.flush().map_err(|source| io_err(path, source))?;

    debug!(id, path = %path.display(), "row written");
    Ok(())
}

fn open_append(path: &Path) -> Result<File, PersistenceError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| io_err(path, source))
}

pub fn ensure_directory(dir: &Path) -> Result<(), PersistenceError> {
    if dir.exists() && !dir.is_dir() {
        let source = std::io::Error::other("path exists but is not a directory");
        return Err(io_err(dir, source));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| io_err(dir, source))?;
    }
    Ok(())
}

fn io_err(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io { path: path.to_path_buf(), source }
}

fn csv_err(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Csv { path: path.to_path_buf(), source }
}
