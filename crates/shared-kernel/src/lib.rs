// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    Result, ScanError, ScanResult, WordlistError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{LineCount, Position};
