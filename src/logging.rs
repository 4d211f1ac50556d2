//! Log output for the binary.
//!
//! Library crates log through the `log` facade. The subscriber installed here
//! picks those records up and writes them to stderr, so stdout only ever
//! carries the report.
//!
//! `WORDLIST_LOG` takes the usual filter syntax (`debug`,
//! `wordlist_lines_infra=trace`) and overrides `-v`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORDLIST_LOG";

/// Level used when `WORDLIST_LOG` is not set.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(val) if !val.trim().is_empty() => EnvFilter::builder().parse_lossy(val),
        _ => EnvFilter::new(level_for(verbosity)),
    }
}

/// Initialise the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .try_init();

    if installed.is_err() {
        log::debug!("log subscriber already installed");
    }
}
