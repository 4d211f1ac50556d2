// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use wordlist_lines_domain::LineCounter;
use wordlist_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Wordlists are scanned byte by byte, so a larger buffer keeps `read`
/// syscalls rare.
const READ_BUFFER_CAPACITY: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(|file| BufReader::with_capacity(READ_BUFFER_CAPACITY, file))
    }

    /// ファイルを開き、行数カウンタに束縛する
    ///
    /// The file handle moves into the counter and is closed when the counter
    /// is consumed or dropped.
    pub fn open_counter(path: &Path) -> InfraResult<LineCounter<BufReader<File>>> {
        Self::open_buffered(path).map(LineCounter::new)
    }

    /// Read a list of paths, one per line. Blank lines are skipped, a
    /// leading BOM and trailing `\r` are stripped.
    pub fn read_path_list(path: &Path) -> InfraResult<Vec<PathBuf>> {
        let reader = Self::open_buffered(path)?;
        let mut files = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
            let line = if index == 0 { line.trim_start_matches('\u{feff}') } else { line.as_str() };
            let entry = line.trim_end_matches('\r');
            if !entry.is_empty() {
                files.push(PathBuf::from(entry));
            }
        }
        Ok(files)
    }
}
