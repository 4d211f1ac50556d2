// crates/infra/src/validation/file_validator.rs
use std::path::Path;

use wordlist_lines_domain::model::{WordlistEntry, WordlistOutcome, WordlistReport};
use wordlist_lines_shared_kernel::{LineCount, Result};

use crate::persistence::FileReader;

/// ファイル 1 つを検証して行数を返す
///
/// # Errors
///
/// `Infrastructure(FileRead)` if the file cannot be opened, `Scan(..)` for
/// rejected content or a read failure part-way through.
pub fn count_file(path: &Path) -> Result<LineCount> {
    let counter = FileReader::open_counter(path)?;
    Ok(counter.count()?)
}

/// Validates one entry.
///
/// Rejected content becomes an `Invalid` report. I/O failures (open or read)
/// are returned as `Err` so the caller can decide between recording and
/// aborting.
pub fn validate_entry(entry: &WordlistEntry) -> Result<WordlistReport> {
    log::debug!("validating {}", entry.path.display());
    match count_file(&entry.path) {
        Ok(lines) => Ok(WordlistReport::new(entry, WordlistOutcome::Valid { lines })),
        Err(err) => {
            let rejection = err.as_scan_error().filter(|scan| scan.is_rejection()).map(WordlistOutcome::from);
            match rejection {
                Some(outcome) => {
                    log::debug!("{}: {err}", entry.path.display());
                    Ok(WordlistReport::new(entry, outcome))
                }
                None => Err(err),
            }
        }
    }
}
