use std::{io, sync::Arc};

use anyhow::{Context, Result};
use wordlist_lines_domain::{
    LineCounter,
    model::{WordlistEntry, WordlistOutcome, WordlistReport},
};
use wordlist_lines_infra::{BatchValidator, StderrProgress, WalkEnumerator};
use wordlist_lines_usecase::{ValidateWordlists, ValidationOutput};

use crate::{cli, config::Config, logging, presentation};

/// Returns `true` when every wordlist was valid.
pub fn run() -> Result<bool> {
    let config = cli::load_config()?;
    logging::init(config.verbosity);
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<bool> {
    log::debug!("config: {config:?}");

    let output = if config.reads_stdin() {
        validate_stdin().context("failed to validate standard input")?
    } else {
        validate_paths(config).context("failed to validate wordlists")?
    };

    presentation::emit(&output, config).context("failed to emit output")?;
    Ok(output.summary.all_valid())
}

fn validate_paths(config: &Config) -> wordlist_lines_shared_kernel::Result<ValidationOutput> {
    let enumerator = WalkEnumerator::new();
    let mut validator = BatchValidator::new(config.jobs).strict(config.strict);
    if config.progress {
        validator = validator.with_progress(Arc::new(StderrProgress::new()));
    }
    ValidateWordlists::new(&enumerator, &validator).run(&config.plan)
}

/// 標準入力を 1 つのワードリストとして検証
fn validate_stdin() -> wordlist_lines_shared_kernel::Result<ValidationOutput> {
    let entry = WordlistEntry::new("-", 0);
    let outcome = match LineCounter::new(io::stdin().lock()).count() {
        Ok(lines) => WordlistOutcome::Valid { lines },
        Err(err) if err.is_rejection() => WordlistOutcome::from(&err),
        Err(err) => return Err(err.into()),
    };
    Ok(ValidationOutput::new(vec![WordlistReport::new(&entry, outcome)]))
}
