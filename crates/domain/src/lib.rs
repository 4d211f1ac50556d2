//! # Domain
//!
//! Wordlist validation rules, free of any I/O policy:
//!
//! - [`lexer`]: label charset, tokens and the byte-level scanner
//! - [`counter`]: drives the scanner and produces a line count
//! - [`model`]: wordlist entries and per-file reports
//! - [`analytics`]: batch summaries

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod counter;
pub mod lexer;
pub mod model;

pub use counter::{LineCounter, count_str};
pub use lexer::{DnsLabelCharset, LabelCharset, Scanner};
