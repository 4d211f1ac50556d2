use clap::ValueEnum;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Jsonl,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}
