// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wordlist_lines_shared_kernel::Result;

/// Input parameters controlling wordlist discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistEnumerationPlan {
    pub roots: Vec<PathBuf>,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    /// Extensions kept while walking directories. Empty keeps everything.
    pub extensions: Vec<String>,
    pub files_from: Option<PathBuf>,
}

impl Default for WordlistEnumerationPlan {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            follow_links: false,
            include_hidden: false,
            respect_gitignore: true,
            max_depth: None,
            extensions: vec!["txt".to_string()],
            files_from: None,
        }
    }
}

/// DTO representing a wordlist discovered by an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistEntryDto {
    pub path: PathBuf,
    pub size: u64,
}

/// Port for enumerating wordlist files.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &WordlistEnumerationPlan) -> Result<Vec<WordlistEntryDto>>;
}
