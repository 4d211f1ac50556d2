//! # Infrastructure
//!
//! Adapters that implement the ports on top of the real filesystem:
//! directory walking, file access, per-file and batch validation, and
//! progress output.

#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;
pub mod validation;

pub use filesystem::WalkEnumerator;
pub use progress::StderrProgress;
pub use validation::{BatchValidator, count_file, validate_entry};
