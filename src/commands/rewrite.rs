use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use headerfix::defaults::CONFIRMATION;
use headerfix::headers::{self, RewriteReport};
use headerfix::RewriteConfig;

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Directory the table components are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Report what would change without writing the files
    #[arg(long)]
    pub dry_run: bool,
    /// Print a JSON response envelope instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RewriteOutput {
    #[serde(rename = "headers.rewrite")]
    Rewrite {
        root: String,
        dry_run: bool,
        total_replacements: usize,
        files: Vec<FileSummary>,
        applied: bool,
    },
}

#[derive(Serialize)]
pub struct FileSummary {
    pub file: String,
    pub replacements: usize,
    pub labels: Vec<String>,
}

impl RewriteOutput {
    /// Plain-text rendering: the confirmation line once written, a per-file
    /// preview on dry runs.
    pub fn to_text(&self) -> String {
        match self {
            RewriteOutput::Rewrite { applied: true, .. } => CONFIRMATION.to_string(),
            RewriteOutput::Rewrite { files, .. } => files
                .iter()
                .map(|f| {
                    format!(
                        "{}: {} header(s) would be rewritten",
                        f.file, f.replacements
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub fn run(args: RewriteArgs) -> CmdResult<RewriteOutput> {
    let config = RewriteConfig::new(args.root).dry_run(args.dry_run);
    config.validate()?;

    let report = headers::rewrite_headers(&config)?;

    Ok((summarize(&config, report), 0))
}

fn summarize(config: &RewriteConfig, report: RewriteReport) -> RewriteOutput {
    RewriteOutput::Rewrite {
        root: config.root.display().to_string(),
        dry_run: config.dry_run,
        total_replacements: report.total_replacements,
        files: report
            .files
            .into_iter()
            .map(|f| FileSummary {
                file: f.file,
                replacements: f.replacements,
                labels: f.labels,
            })
            .collect(),
        applied: report.applied,
    }
}
