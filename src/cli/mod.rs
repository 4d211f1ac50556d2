mod args;
mod value_enum;

use std::path::{Path, PathBuf};

pub use args::Args;
use clap::Parser;
pub use value_enum::CliOutputFormat;
use wordlist_lines_ports::filesystem::WordlistEnumerationPlan;
use wordlist_lines_shared_kernel::{PresentationError, Result};

use crate::config::{Config, ConfigBuilder, InputSource};

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// `-` は単独指定のみ許可
fn resolve_input(paths: &[PathBuf], files_from: Option<&Path>) -> Result<InputSource> {
    if !paths.iter().any(|p| is_stdin(p)) {
        return Ok(InputSource::Paths);
    }
    if paths.len() > 1 || files_from.is_some() {
        return Err(PresentationError::InvalidValue {
            flag: "paths".to_string(),
            value: "-".to_string(),
            reason: "standard input cannot be combined with other inputs".to_string(),
        }
        .into());
    }
    Ok(InputSource::Stdin)
}

fn normalise_extensions(ext: &[String]) -> Vec<String> {
    ext.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Build the enumeration plan without taking ownership of `args`.
fn make_plan(args: &Args) -> WordlistEnumerationPlan {
    // With --files-from and no explicit paths, only the listed files are used.
    let roots = if args.paths.is_empty() && args.files_from.is_none() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    WordlistEnumerationPlan {
        roots,
        follow_links: args.follow,
        include_hidden: args.hidden,
        respect_gitignore: !args.no_gitignore,
        max_depth: args.max_depth,
        extensions: normalise_extensions(&args.ext),
        files_from: args.files_from.clone(),
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when argument validation fails or the builder rejects the
/// resulting options.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_jobs("--jobs", args.jobs)?;
    let input = resolve_input(&args.paths, args.files_from.as_deref())?;

    ConfigBuilder::default()
        .plan(make_plan(args))
        .input(input)
        .format(args.format)
        .jobs(args.jobs.unwrap_or_else(num_cpus::get))
        .strict(args.strict)
        .progress(args.progress)
        .output_path(args.output.clone())
        .verbosity(args.verbose)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use wordlist_lines_shared_kernel::WordlistError;

    use super::*;
    use crate::config::OutputFormat;

    fn config_from(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("wordlist_lines").chain(argv.iter().copied()))
            .expect("args parse");
        build_config(&args)
    }

    #[test]
    fn defaults_walk_current_directory_for_txt() {
        let config = config_from(&[]).expect("config builds");
        assert_eq!(config.plan.roots, vec![PathBuf::from(".")]);
        assert_eq!(config.plan.extensions, vec!["txt".to_string()]);
        assert!(config.plan.respect_gitignore);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.jobs >= 1);
        assert!(!config.reads_stdin());
    }

    #[test]
    fn extension_list_is_normalised() {
        let config = config_from(&["--ext", ".TXT,lst"]).expect("config builds");
        assert_eq!(config.plan.extensions, vec!["txt".to_string(), "lst".to_string()]);
    }

    #[test]
    fn empty_extension_accepts_everything() {
        let config = config_from(&["--ext", ""]).expect("config builds");
        assert!(config.plan.extensions.is_empty());
    }

    #[test]
    fn lone_dash_reads_stdin() {
        let config = config_from(&["-"]).expect("config builds");
        assert!(config.reads_stdin());
    }

    #[test]
    fn dash_with_other_paths_is_rejected() {
        let err = config_from(&["-", "lists"]).unwrap_err();
        assert!(matches!(err, WordlistError::Presentation(PresentationError::InvalidValue { .. })), "{err:?}");
    }

    #[test]
    fn files_from_alone_does_not_walk_cwd() {
        let config = config_from(&["--files-from", "inputs.lst"]).expect("config builds");
        assert!(config.plan.roots.is_empty());
        assert_eq!(config.plan.files_from, Some(PathBuf::from("inputs.lst")));
    }

    #[test]
    fn flags_reach_the_plan() {
        let config = config_from(&[
            "--hidden",
            "--follow",
            "--no-gitignore",
            "--max-depth",
            "2",
            "--strict",
            "-j",
            "3",
            "-vv",
            "--format",
            "jsonl",
            "lists",
        ])
        .expect("config builds");
        assert!(config.plan.include_hidden);
        assert!(config.plan.follow_links);
        assert!(!config.plan.respect_gitignore);
        assert_eq!(config.plan.max_depth, Some(2));
        assert!(config.strict);
        assert_eq!(config.jobs, 3);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.format, OutputFormat::Jsonl);
    }

    #[test]
    fn validate_jobs_rejects_out_of_range() {
        for jobs in [0, MAX_JOBS + 1] {
            let err = validate_jobs("--jobs", Some(jobs)).unwrap_err();
            if let WordlistError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
                assert_eq!(flag, "--jobs");
                assert_eq!(value, jobs.to_string());
            } else {
                panic!("unexpected error variant: {err:?}");
            }
        }
        assert!(validate_jobs("--jobs", Some(4)).is_ok());
    }
}
