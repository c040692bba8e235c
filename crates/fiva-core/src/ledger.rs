//! In-memory ledger store.
//!
//! Holds the session's records and owns the only two mutation paths:
//! ingesting pipeline output and applying a reviewer's save. The
//! pipeline itself is pure, so distinct texts may be processed
//! concurrently and appended in any order; callers that share one store
//! across tasks wrap it in a lock so updates to the same record id
//! never interleave.

use chrono::NaiveDate;
use tracing::info;

use crate::error::LedgerError;
use crate::models::{ExpenseCategory, LedgerRecord, RecordStatus, TaxField};
use crate::pipeline::RecordBuilder;

/// Status bucket for ledger queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every record.
    All,
    /// Records still awaiting processing or review.
    Pending,
    /// Reviewer-approved records.
    Approved,
}

/// A reviewer's corrections to one record.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    /// Confirmed or corrected expense category.
    pub category: ExpenseCategory,
    /// Confirmed or corrected declaration field.
    pub tax_field: Option<TaxField>,
}

/// Transient collection of ledger records, newest first.
pub struct LedgerStore {
    builder: RecordBuilder,
    records: Vec<LedgerRecord>,
}

impl LedgerStore {
    /// Create an empty store with default pipeline constants.
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    /// Create an empty store around a configured builder.
    pub fn with_builder(builder: RecordBuilder) -> Self {
        Self {
            builder,
            records: Vec::new(),
        }
    }

    /// Run the pipeline on recognized text and prepend the new record.
    ///
    /// The sequence number fed to placeholder generation is derived
    /// from the store size, matching the legacy numbering scheme.
    pub fn ingest(&mut self, text: &str, fallback_date: NaiveDate) -> &LedgerRecord {
        let seq = self.records.len() as u32 + 1;
        let record = self.builder.build(text, fallback_date, seq);
        info!(id = %record.id, "record ingested into ledger");
        self.records.insert(0, record);
        &self.records[0]
    }

    /// Append an already-built record.
    pub fn append(&mut self, record: LedgerRecord) {
        self.records.insert(0, record);
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&LedgerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Apply a reviewer's save to one record.
    ///
    /// This is the only path out of `NeedsReview`. The save always sets
    /// `Approved`, regardless of field completeness: the reviewer is
    /// trusted outright. A personal category clears the tax field.
    pub fn apply_review(
        &mut self,
        id: &str,
        update: ReviewUpdate,
    ) -> Result<&LedgerRecord, LedgerError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::UnknownRecord(id.to_string()))?;

        record.category = update.category;
        record.tax_field = if update.category == ExpenseCategory::Personal {
            None
        } else {
            update.tax_field
        };
        record.status = RecordStatus::Approved;

        info!(id = %record.id, category = record.category.as_str(), "review applied");
        Ok(&*record)
    }

    /// All records, newest first.
    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    /// Records matching a status bucket and a free-text search over
    /// issuer name, tax id, and document code.
    pub fn filtered(&self, filter: StatusFilter, search: &str) -> Vec<&LedgerRecord> {
        let needle = search.to_lowercase();

        self.records
            .iter()
            .filter(|r| match filter {
                StatusFilter::All => true,
                StatusFilter::Pending => {
                    r.status == RecordStatus::Pending || r.status == RecordStatus::NeedsReview
                }
                StatusFilter::Approved => r.status == RecordStatus::Approved,
            })
            .filter(|r| {
                needle.is_empty()
                    || r.issuer_name.to_lowercase().contains(&needle)
                    || r.issuer_tax_id.contains(&needle)
                    || r.document_code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of records still awaiting review.
    pub fn pending_count(&self) -> usize {
        self.filtered(StatusFilter::Pending, "").len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
