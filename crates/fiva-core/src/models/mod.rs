//! Data models for ledger records and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, FivaConfig};
pub use record::{ExpenseCategory, LedgerRecord, RecordStatus, TaxField};
