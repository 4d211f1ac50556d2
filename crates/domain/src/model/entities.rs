pub mod report;
pub mod wordlist_entry;

pub use report::{RejectionKind, WordlistOutcome, WordlistReport};
pub use wordlist_entry::WordlistEntry;
