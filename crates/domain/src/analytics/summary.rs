use serde::{Deserialize, Serialize};
use wordlist_lines_shared_kernel::LineCount;

use crate::model::{WordlistOutcome, WordlistReport};

/// Totals over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub files: usize,
    pub valid: usize,
    pub invalid: usize,
    pub unreadable: usize,
    /// Lines across valid files only.
    pub total_lines: LineCount,
}

impl ValidationSummary {
    pub fn from_reports(reports: &[WordlistReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            acc.files += 1;
            match &report.outcome {
                WordlistOutcome::Valid { lines } => {
                    acc.valid += 1;
                    acc.total_lines += *lines;
                }
                WordlistOutcome::Invalid { .. } => acc.invalid += 1,
                WordlistOutcome::Unreadable { .. } => acc.unreadable += 1,
            }
            acc
        })
    }

    /// 不正または読み取り不能なファイル数
    pub const fn errors(&self) -> usize {
        self.invalid + self.unreadable
    }

    pub const fn all_valid(&self) -> bool {
        self.errors() == 0
    }
}
