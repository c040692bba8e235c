//! Batch command - ingest many recognized-text files into a ledger and
//! export the legacy CSV.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use fiva_core::export::export_csv;
use fiva_core::ledger::{LedgerStore, StatusFilter};
use fiva_core::pipeline::RecordBuilder;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob patterns (e.g. "scans/*.txt")
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Status bucket to export
    #[arg(long, value_enum, default_value = "all")]
    filter: FilterArg,

    /// Case-insensitive search over issuer, NIF, and document code
    #[arg(long, default_value = "")]
    search: String,

    /// Fallback document date, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FilterArg {
    /// Every record
    All,
    /// Records awaiting review
    Pending,
    /// Approved records
    Approved,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => StatusFilter::All,
            FilterArg::Pending => StatusFilter::Pending,
            FilterArg::Approved => StatusFilter::Approved,
        }
    }
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let files = expand_patterns(&args.patterns)?;

    if files.is_empty() {
        anyhow::bail!("No input files matched");
    }

    let fallback_date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut store = LedgerStore::with_builder(RecordBuilder::with_config(&config));

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        match fs::read_to_string(file) {
            Ok(text) => {
                let record = store.ingest(&text, fallback_date);
                debug!(file = %file.display(), id = %record.id, "ingested");
            }
            Err(e) => warn!(file = %file.display(), "skipping unreadable file: {}", e),
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let filtered: Vec<_> = store
        .filtered(args.filter.into(), &args.search)
        .into_iter()
        .cloned()
        .collect();
    let csv = export_csv(&filtered);

    if let Some(output_path) = &args.output {
        fs::write(output_path, &csv)?;
        println!(
            "{} Exported {} of {} records to {}",
            style("✓").green(),
            filtered.len(),
            store.len(),
            output_path.display()
        );
    } else {
        println!("{}", csv);
    }

    if store.pending_count() > 0 {
        println!(
            "{} {} records awaiting review",
            style("ℹ").blue(),
            store.pending_count()
        );
    }

    Ok(())
}

fn expand_patterns(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = PathBuf::from(pattern);
        if path.exists() {
            files.push(path);
            continue;
        }

        for entry in glob::glob(pattern)? {
            files.push(entry?);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
