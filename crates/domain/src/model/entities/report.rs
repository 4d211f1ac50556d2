use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wordlist_lines_shared_kernel::{LineCount, ScanError};

use super::WordlistEntry;

/// 不正入力の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    IllegalCharacter,
    BlankLine,
    BareCarriageReturn,
}

/// Result of validating one wordlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordlistOutcome {
    Valid {
        lines: LineCount,
    },
    Invalid {
        kind: RejectionKind,
        line: usize,
        column: usize,
        literal: String,
        message: String,
    },
    /// The source could not be opened or read to the end.
    Unreadable {
        reason: String,
    },
}

impl WordlistOutcome {
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Valid { .. } => "valid",
            Self::Invalid { .. } => "invalid",
            Self::Unreadable { .. } => "unreadable",
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub const fn lines(&self) -> Option<LineCount> {
        match self {
            Self::Valid { lines } => Some(*lines),
            _ => None,
        }
    }
}

impl From<&ScanError> for WordlistOutcome {
    fn from(err: &ScanError) -> Self {
        let message = err.to_string();
        match err {
            ScanError::IllegalCharacter { line, column, literal } => Self::Invalid {
                kind: RejectionKind::IllegalCharacter,
                line: *line,
                column: *column,
                literal: literal.clone(),
                message,
            },
            ScanError::IllegalBlankLine { line, column } => Self::Invalid {
                kind: RejectionKind::BlankLine,
                line: *line,
                column: *column,
                literal: "\n".to_string(),
                message,
            },
            ScanError::IllegalBareCr { line, column } => Self::Invalid {
                kind: RejectionKind::BareCarriageReturn,
                line: *line,
                column: *column,
                literal: "\r".to_string(),
                message,
            },
            ScanError::SourceRead { .. } => Self::Unreadable { reason: message },
        }
    }
}

impl From<Result<LineCount, ScanError>> for WordlistOutcome {
    fn from(result: Result<LineCount, ScanError>) -> Self {
        match result {
            Ok(lines) => Self::Valid { lines },
            Err(err) => Self::from(&err),
        }
    }
}

/// One validated file and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistReport {
    pub path: PathBuf,
    pub size: u64,
    #[serde(flatten)]
    pub outcome: WordlistOutcome,
}

impl WordlistReport {
    pub fn new(entry: &WordlistEntry, outcome: WordlistOutcome) -> Self {
        Self { path: entry.path.clone(), size: entry.size, outcome }
    }

    pub fn unreadable(entry: &WordlistEntry, reason: impl Into<String>) -> Self {
        Self::new(entry, WordlistOutcome::Unreadable { reason: reason.into() })
    }
}
