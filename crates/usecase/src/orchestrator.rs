use wordlist_lines_domain::model::WordlistEntry;
use wordlist_lines_ports::{
    filesystem::{FileEnumerator, WordlistEntryDto, WordlistEnumerationPlan},
    validation::WordlistValidator,
};
use wordlist_lines_shared_kernel::{ApplicationError, Result};

use crate::dto::ValidationOutput;

pub struct ValidateWordlists<'a> {
    enumerator: &'a dyn FileEnumerator,
    validator: &'a dyn WordlistValidator,
}

impl<'a> ValidateWordlists<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator, validator: &'a dyn WordlistValidator) -> Self {
        Self { enumerator, validator }
    }

    /// 列挙 → 検証 → 集計
    ///
    /// # Errors
    ///
    /// Fails when enumeration fails, or when the validator aborts the batch.
    pub fn run(&self, plan: &WordlistEnumerationPlan) -> Result<ValidationOutput> {
        let entries = self.enumerate(plan)?;
        log::debug!("validating {} wordlist(s)", entries.len());

        let reports = self.validator.validate(&entries).map_err(|err| ApplicationError::ValidationFailed {
            reason: format!("{} wordlist(s) queued", entries.len()),
            source: Some(Box::new(err)),
        })?;

        let output = ValidationOutput::new(reports);
        log::info!(
            "files processed: {} errors: {}",
            output.summary.files,
            output.summary.errors()
        );
        Ok(output)
    }

    fn enumerate(&self, plan: &WordlistEnumerationPlan) -> Result<Vec<WordlistEntry>> {
        let ports_entries = self.enumerator.collect(plan).map_err(|err| {
            ApplicationError::FileCollectionFailed {
                reason: format!("{} root(s)", plan.roots.len()),
                source: Some(Box::new(err)),
            }
        })?;
        Ok(ports_entries.into_iter().map(port_to_domain_entry).collect())
    }
}

fn port_to_domain_entry(entry: WordlistEntryDto) -> WordlistEntry {
    WordlistEntry { path: entry.path, size: entry.size }
}
