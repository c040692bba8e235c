//! Error types for the fiva-core library.

use thiserror::Error;

/// Main error type for the fiva library.
#[derive(Error, Debug)]
pub enum FivaError {
    /// OCR recognition error from the injected recognizer.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Ledger operation error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an external text recognizer.
///
/// The extraction pipeline itself has no failure path; these cover the
/// collaborator failures that must be reported before the pipeline runs.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine could not be loaded or reached.
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine ran but could not recognize text in the image.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The input image is unreadable or malformed.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors from ledger store operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No record with the given id exists.
    #[error("unknown record id: {0}")]
    UnknownRecord(String),
}

/// Result type for the fiva library.
pub type Result<T> = std::result::Result<T, FivaError>;
