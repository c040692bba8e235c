//! Core library for Portuguese VAT (IVA) invoice bookkeeping.
//!
//! This crate provides:
//! - Field extraction from OCR-recognized invoice text (NIF, date,
//!   total, ATCUD, issuer name)
//! - VAT estimation and keyword-based expense classification
//! - Record building with review-first lifecycle semantics
//! - An in-memory ledger with filtered queries and legacy CSV export

pub mod classify;
pub mod error;
pub mod export;
pub mod extract;
pub mod ledger;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod vat;

pub use classify::{classify, Classification};
pub use error::{FivaError, LedgerError, OcrError, Result};
pub use export::export_csv;
pub use extract::{extract_fields, ExtractedFields, FieldRule};
pub use ledger::{LedgerStore, ReviewUpdate, StatusFilter};
pub use models::{ExpenseCategory, FivaConfig, LedgerRecord, RecordStatus, TaxField};
pub use ocr::{RecognizeProgress, TextRecognizer};
pub use pipeline::RecordBuilder;
pub use vat::estimate_vat;
