// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use wordlist_lines_ports::filesystem::WordlistEnumerationPlan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Csv,
}

/// Where wordlists come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Walk the plan's roots.
    Paths,
    /// A single wordlist on standard input.
    Stdin,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub plan: WordlistEnumerationPlan,
    #[builder(default = "InputSource::Paths")]
    pub input: InputSource,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub progress: bool,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub verbosity: u8,
}

impl Config {
    pub fn reads_stdin(&self) -> bool {
        self.input == InputSource::Stdin
    }
}
