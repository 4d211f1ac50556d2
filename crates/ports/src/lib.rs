//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Wordlist discovery and directory traversal
//! - [`validation`]: Running the line counter over a batch of files
//! - [`progress`]: Progress reporting for long-running batches
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod validation;
