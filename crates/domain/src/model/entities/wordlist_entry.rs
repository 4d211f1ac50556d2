use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A wordlist file queued for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistEntry {
    pub path: PathBuf,
    pub size: u64,
}

impl WordlistEntry {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self { path: path.into(), size }
    }
}
