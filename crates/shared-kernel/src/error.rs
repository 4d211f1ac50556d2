// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::Position;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WordlistError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WordlistError>,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, WordlistError>;

impl WordlistError {
    /// Context を剥がした根本のエラーを返す
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the scan error at the root of this error, if any.
    pub fn as_scan_error(&self) -> Option<&ScanError> {
        match self.root_cause() {
            Self::Scan(err) => Some(err),
            _ => None,
        }
    }
}

/// A wordlist was rejected, or its byte source failed.
///
/// Exactly one of these is produced per counting run: the first one hit.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid character '{}' found at row {line} col {column}", .literal.escape_debug())]
    IllegalCharacter { line: usize, column: usize, literal: String },

    #[error("blank line: unexpected '\\n' found at row {line} col {column}")]
    IllegalBlankLine { line: usize, column: usize },

    #[error("bare carriage return: '\\r' not followed by '\\n' at row {line} col {column}")]
    IllegalBareCr { line: usize, column: usize },

    #[error("failed to read wordlist source: {source}")]
    SourceRead {
        #[source]
        source: std::io::Error,
    },
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;

impl ScanError {
    pub fn illegal_character(position: Position, literal: impl Into<String>) -> Self {
        Self::IllegalCharacter { line: position.line, column: position.column, literal: literal.into() }
    }

    pub const fn blank_line(position: Position) -> Self {
        Self::IllegalBlankLine { line: position.line, column: position.column }
    }

    pub const fn bare_cr(position: Position) -> Self {
        Self::IllegalBareCr { line: position.line, column: position.column }
    }

    /// Position of the offending byte. `None` for I/O failures.
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::IllegalCharacter { line, column, .. }
            | Self::IllegalBlankLine { line, column }
            | Self::IllegalBareCr { line, column } => Some(Position::new(*line, *column)),
            Self::SourceRead { .. } => None,
        }
    }

    /// The offending character or line ending, unescaped.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::IllegalCharacter { literal, .. } => Some(literal),
            Self::IllegalBlankLine { .. } => Some("\n"),
            Self::IllegalBareCr { .. } => Some("\r"),
            Self::SourceRead { .. } => None,
        }
    }

    /// 入力内容の不正 (I/O 失敗ではない) かどうか
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::SourceRead { .. })
    }
}

impl From<std::io::Error> for ScanError {
    fn from(source: std::io::Error) -> Self {
        Self::SourceRead { source }
    }
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to collect wordlists: {reason}")]
    FileCollectionFailed {
        reason: String,
        #[source]
        source: Option<Box<WordlistError>>,
    },

    #[error("Failed to validate wordlists: {reason}")]
    ValidationFailed {
        reason: String,
        #[source]
        source: Option<Box<WordlistError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for WordlistError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WordlistError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WordlistError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WordlistError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
