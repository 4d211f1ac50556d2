// crates/infra/src/validation/batch.rs
//! ワードリストの一括検証
//!
//! Each file gets its own scanner and its own file handle, so workers share
//! nothing but the read-only entry list.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use wordlist_lines_domain::model::{WordlistEntry, WordlistReport};
use wordlist_lines_ports::{progress::ProgressSink, validation::WordlistValidator};
#[cfg(feature = "parallel")]
use wordlist_lines_shared_kernel::InfrastructureError;
use wordlist_lines_shared_kernel::{ErrorContext, Result};

use super::file_validator::validate_entry;

/// Below this many files a thread pool costs more than it saves.
const PARALLEL_THRESHOLD: usize = 8;

type EntryResult = Result<WordlistReport>;

/// Validates entries one file per work item.
///
/// With `strict` the first I/O failure (in input order) aborts the batch.
/// Otherwise failures are recorded as `Unreadable` reports.
pub struct BatchValidator {
    jobs: usize,
    strict: bool,
    progress: Option<Arc<dyn ProgressSink>>,
}

impl BatchValidator {
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1), strict: false, progress: None }
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }

    fn process(&self, entry: &WordlistEntry) -> EntryResult {
        let result = validate_entry(entry);
        if let Some(progress) = &self.progress
            && let Err(err) = progress.on_file(&entry.path)
        {
            log::warn!("progress reporting failed: {err}");
        }
        result
    }

    /// 順次処理版
    fn validate_sequential(&self, entries: &[WordlistEntry]) -> Vec<EntryResult> {
        entries.iter().map(|entry| self.process(entry)).collect()
    }

    /// 並列処理版
    #[cfg(feature = "parallel")]
    fn validate_parallel(&self, entries: &[WordlistEntry]) -> Result<Vec<EntryResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        Ok(pool.install(|| entries.par_iter().map(|entry| self.process(entry)).collect()))
    }

    #[cfg(feature = "parallel")]
    fn validate_all(&self, entries: &[WordlistEntry]) -> Result<Vec<EntryResult>> {
        if entries.len() < PARALLEL_THRESHOLD || self.jobs == 1 {
            return Ok(self.validate_sequential(entries));
        }
        self.validate_parallel(entries)
    }

    #[cfg(not(feature = "parallel"))]
    fn validate_all(&self, entries: &[WordlistEntry]) -> Result<Vec<EntryResult>> {
        Ok(self.validate_sequential(entries))
    }

    /// Aggregate per-entry results. Results arrive in input order.
    fn collect_results(&self, entries: &[WordlistEntry], results: Vec<EntryResult>) -> Result<Vec<WordlistReport>> {
        let mut reports = Vec::with_capacity(results.len());
        let mut failure_count = 0usize;

        for (entry, result) in entries.iter().zip(results) {
            match result {
                Ok(report) => reports.push(report),
                Err(err) if self.strict => {
                    return Err(err).with_context(|| format!("validating '{}'", entry.path.display()));
                }
                Err(err) => {
                    log::warn!("{}: {err}", entry.path.display());
                    failure_count += 1;
                    reports.push(WordlistReport::unreadable(entry, err.to_string()));
                }
            }
        }

        if failure_count > 0 {
            log::warn!("{failure_count} file(s) could not be read");
        }
        Ok(reports)
    }
}

impl WordlistValidator for BatchValidator {
    fn validate(&self, entries: &[WordlistEntry]) -> Result<Vec<WordlistReport>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(progress) = &self.progress {
            progress.on_start(entries.len())?;
        }
        let results = self.validate_all(entries)?;
        let reports = self.collect_results(entries, results)?;
        if let Some(progress) = &self.progress {
            progress.on_complete()?;
        }
        Ok(reports)
    }
}

// ============================================================================
// Tests
// ============================================================================
