//! Record building: combines extraction, VAT estimation, and
//! classification into one ledger record.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::classify::classify;
use crate::extract::extract_fields;
use crate::models::{ExtractionConfig, FivaConfig, LedgerRecord, RecordStatus};
use crate::vat::estimate_vat;

/// Sentinel NIF for documents where no tax number was recognized.
const FALLBACK_TAX_ID: &str = "999999990";
const FALLBACK_NAME: &str = "Desconhecido (OCR)";
const REVIEW_NOTE: &str =
    "Dados extraídos via OCR. Requer revisão manual para confirmar valores e categoria.";
const SUMMARY_MAX_CHARS: usize = 100;

/// Builds complete ledger records from raw recognized text.
///
/// Building never fails: every absent field is replaced by a fixed
/// placeholder and the record enters the ledger as `NeedsReview` with a
/// deliberately low confidence. A record made entirely of placeholders
/// is valid but useless, and that is exactly what the review queue is
/// for.
pub struct RecordBuilder {
    config: ExtractionConfig,
}

impl RecordBuilder {
    /// Create a builder with default pipeline constants.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create a builder from a loaded configuration.
    pub fn with_config(config: &FivaConfig) -> Self {
        Self {
            config: config.extraction.clone(),
        }
    }

    /// Build one record from recognized text.
    ///
    /// `fallback_date` substitutes for an unextractable document date
    /// (callers typically pass today); `seq` feeds the placeholder id
    /// and document-code generation and nothing else.
    pub fn build(&self, text: &str, fallback_date: NaiveDate, seq: u32) -> LedgerRecord {
        let fields = extract_fields(text);
        let total = fields.total.unwrap_or(Decimal::ZERO);
        let estimated_tax = estimate_vat(total, self.config.vat_estimate_rate);
        let classification = classify(text);

        let date = fields
            .date
            .unwrap_or_else(|| fallback_date.format("%Y-%m-%d").to_string());

        let record = LedgerRecord {
            id: format!("100{}", seq),
            issuer_tax_id: fields.tax_id.unwrap_or_else(|| FALLBACK_TAX_ID.to_string()),
            issuer_name: fields.issuer_name.unwrap_or_else(|| FALLBACK_NAME.to_string()),
            period: quarter_tag(&date, fallback_date),
            date,
            gross_total: total,
            estimated_tax,
            // Display fallback only; uniqueness is not guaranteed.
            document_code: fields
                .document_code
                .unwrap_or_else(|| format!("AT-OCR-{}", seq)),
            status: RecordStatus::NeedsReview,
            category: classification.category,
            tax_field: classification.tax_field,
            confidence: self.config.ocr_confidence,
            justification: format!("{} {}", REVIEW_NOTE, classification.justification),
            items_summary: summarize(text),
        };

        info!(
            id = %record.id,
            category = record.category.as_str(),
            total = %record.gross_total,
            "built ledger record"
        );

        record
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(text: &str) -> String {
    let head: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{}...", head.replace('\n', " "))
}

fn quarter_tag(date: &str, fallback: NaiveDate) -> String {
    // The extracted date may be DMY-shaped or OCR-mangled; quarter
    // derivation only trusts a clean ISO date.
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or(fallback);
    format!("Q{}_{}", parsed.month0() / 3 + 1, parsed.year())
}
