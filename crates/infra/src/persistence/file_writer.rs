// crates/infra/src/persistence/file_writer.rs
use std::{io::Write, path::Path};

use tempfile::NamedTempFile;
use wordlist_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data`: write a sibling temp file, then
    /// rename it over the target.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let fs_err = |operation: &str, source| InfrastructureError::FileSystemOperation {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| fs_err("create temp file", e))?;
        tmp.write_all(data).map_err(|e| fs_err("write", e))?;
        tmp.flush().map_err(|e| fs_err("flush", e))?;
        // Best effort: some filesystems reject fsync on temp files.
        if let Err(err) = tmp.as_file().sync_all() {
            log::debug!("fsync of temp file for '{}' failed: {err}", path.display());
        }
        tmp.persist(path).map_err(|e| fs_err("rename", e.error))?;
        Ok(())
    }
}
