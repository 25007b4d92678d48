use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path:?} missing or not writable: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ensure output directory exists; create if missing. Safe to call repeatedly.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let dir_error = |source: io::Error| PersistError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(dir_error)?;
        if !meta.is_dir() {
            return Err(dir_error(io::Error::other("path is not a directory")));
        }
    } else {
        fs::create_dir_all(dir).map_err(dir_error)?;
    }
    // Writability check: create and drop a temp file.
    NamedTempFile::new_in(dir).map_err(dir_error)?;
    Ok(())
}

/// Atomically replace `path` with `content`: write a sibling temp file, then rename.
///
/// Readers never observe a partially written file; concurrent writers to the
/// same path resolve to whichever rename lands last.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| PersistError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let io_error = |source: io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    tmp.write_all(content.as_bytes()).map_err(io_error)?;
    tmp.flush().map_err(io_error)?;
    tmp.as_file_mut().sync_all().map_err(io_error)?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

/// Atomic writer rooted at one directory.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);
        write_atomic(&target, content)?;
        Ok(target)
    }
}
