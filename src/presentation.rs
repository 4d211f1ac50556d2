// src/presentation.rs
use std::{
    borrow::Cow,
    io::{self, Write},
};

use wordlist_lines_domain::model::{WordlistOutcome, WordlistReport};
use wordlist_lines_infra::persistence::FileWriter;
use wordlist_lines_shared_kernel::Result;
use wordlist_lines_usecase::ValidationOutput;

use crate::config::{Config, OutputFormat};

/// Render the report and send it to `--output` or stdout.
///
/// # Errors
///
/// Fails when serialisation or the final write fails.
pub fn emit(output: &ValidationOutput, config: &Config) -> Result<()> {
    match &config.output_path {
        Some(path) => {
            let mut buf = Vec::new();
            render(output, config, &mut buf)?;
            FileWriter::atomic_write(path, &buf)?;
            log::info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            render(output, config, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn render(output: &ValidationOutput, config: &Config, out: &mut dyn Write) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_table(output, config.jobs, out),
        OutputFormat::Json => write_json(output, out),
        OutputFormat::Jsonl => write_jsonl(output, out),
        OutputFormat::Csv => write_csv(output, out),
    }
}

fn write_table(output: &ValidationOutput, jobs: usize, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "wordlist_lines v{} · parallel={jobs}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(out, "    LINES  STATUS      FILE")?;
    writeln!(out, "----------------------------------------------")?;

    for report in &output.files {
        let lines = report.outcome.lines().map_or_else(|| "-".to_string(), |n| n.to_string());
        writeln!(out, "{lines:>9}  {:<10}  {}", report.outcome.status(), report.path.display())?;
        if let Some(detail) = error_detail(report) {
            writeln!(out, "           ! {detail}")?;
        }
    }

    let summary = &output.summary;
    writeln!(out, "---")?;
    writeln!(out, "{:>9}              TOTAL ({} files)", summary.total_lines, summary.files)?;
    writeln!(out)?;
    writeln!(out, "files processed: {} errors: {}", summary.files, summary.errors())?;
    Ok(())
}

fn error_detail(report: &WordlistReport) -> Option<&str> {
    match &report.outcome {
        WordlistOutcome::Valid { .. } => None,
        WordlistOutcome::Invalid { message, .. } => Some(message),
        WordlistOutcome::Unreadable { reason } => Some(reason),
    }
}

fn write_json(output: &ValidationOutput, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, output)?;
    writeln!(out)?;
    Ok(())
}

fn write_jsonl(output: &ValidationOutput, out: &mut dyn Write) -> Result<()> {
    for report in &output.files {
        let mut value = serde_json::to_value(report)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    }

    let mut summary = serde_json::to_value(output.summary)?;
    if let Some(obj) = summary.as_object_mut() {
        obj.insert("type".to_string(), "summary".into());
        obj.insert("version".to_string(), crate::VERSION.into());
    }
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    Ok(())
}

fn write_csv(output: &ValidationOutput, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "path,status,lines,line,column,literal")?;
    for report in &output.files {
        let path = report.path.display().to_string();
        let (lines, line, column, literal) = match &report.outcome {
            WordlistOutcome::Valid { lines } => (lines.to_string(), String::new(), String::new(), String::new()),
            WordlistOutcome::Invalid { line, column, literal, .. } => {
                (String::new(), line.to_string(), column.to_string(), literal.escape_debug().to_string())
            }
            WordlistOutcome::Unreadable { .. } => Default::default(),
        };
        writeln!(
            out,
            "{},{},{lines},{line},{column},{}",
            csv_field(&path),
            report.outcome.status(),
            csv_field(&literal)
        )?;
    }
    Ok(())
}

/// Quote a CSV field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
