//! Process command - build one ledger record from a recognized-text file.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use fiva_core::export::export_csv;
use fiva_core::models::LedgerRecord;
use fiva_core::pipeline::RecordBuilder;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file containing OCR-recognized text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Fallback document date, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Sequence number for placeholder id and document-code generation
    #[arg(long, default_value_t = 1)]
    seq: u32,

    /// Show the extraction confidence after processing
    #[arg(long)]
    show_confidence: bool,

    /// Check record invariants and report violations
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Legacy CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());
    let text = fs::read_to_string(&args.input)?;

    let fallback_date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let record = RecordBuilder::with_config(&config).build(&text, fallback_date, args.seq);

    if args.validate {
        let issues = record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            record.confidence * 100.0
        );
    }

    Ok(())
}

fn format_record(record: &LedgerRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => Ok(export_csv(std::slice::from_ref(record))),
        OutputFormat::Text => Ok(text_summary(record)),
    }
}

fn text_summary(record: &LedgerRecord) -> String {
    let tax_field = record
        .tax_field
        .map(|f| f.label().to_string())
        .unwrap_or_else(|| "-".to_string());

    [
        format!("Documento:  {} ({})", record.document_code, record.id),
        format!("Emitente:   {} (NIF {})", record.issuer_name, record.issuer_tax_id),
        format!("Data:       {} [{}]", record.date, record.period),
        format!("Total:      {}  IVA estimado: {}", record.gross_total, record.estimated_tax),
        format!("Categoria:  {}  Campo: {}", record.category.as_str(), tax_field),
        format!("Estado:     {}", record.status.as_str()),
        format!("Notas:      {}", record.justification),
    ]
    .join("\n")
}
