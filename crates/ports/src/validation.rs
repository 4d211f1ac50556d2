// crates/ports/src/validation.rs
use wordlist_lines_domain::model::{WordlistEntry, WordlistReport};
use wordlist_lines_shared_kernel::Result;

/// Port for validating a batch of wordlists.
///
/// Implementations return one report per entry, in input order. Rejected
/// content is a report, not an error; `Err` is reserved for failures that
/// abort the whole batch.
pub trait WordlistValidator: Send + Sync {
    fn validate(&self, entries: &[WordlistEntry]) -> Result<Vec<WordlistReport>>;
}
