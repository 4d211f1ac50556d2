use serde::Serialize;
use wordlist_lines_domain::{analytics::ValidationSummary, model::WordlistReport};

/// Output of [`crate::ValidateWordlists::run`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutput {
    pub files: Vec<WordlistReport>,
    pub summary: ValidationSummary,
}

impl ValidationOutput {
    pub fn new(files: Vec<WordlistReport>) -> Self {
        let summary = ValidationSummary::from_reports(&files);
        Self { files, summary }
    }
}
