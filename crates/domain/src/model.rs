pub mod entities;

pub use entities::{RejectionKind, WordlistEntry, WordlistOutcome, WordlistReport};
