//! Rule-based field extractors for Portuguese invoice text.
//!
//! Each field has its own named rule so the patterns can be tested in
//! isolation. Extraction never fails: a rule that finds nothing yields
//! `None` and the record builder substitutes a fallback.

pub mod amounts;
pub mod dates;
pub mod doc_code;
pub mod name;
pub mod patterns;
pub mod tax_id;

pub use amounts::TotalRule;
pub use dates::DateRule;
pub use doc_code::DocumentCodeRule;
pub use name::IssuerNameRule;
pub use tax_id::TaxIdRule;

use rust_decimal::Decimal;
use tracing::debug;

/// Trait for single-field extraction rules.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Partial extraction result; every field is independently optional.
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    /// Issuer tax number (NIF), 9 digits.
    pub tax_id: Option<String>,
    /// Document date, normalized to `-` separators.
    pub date: Option<String>,
    /// Labeled gross total.
    pub total: Option<Decimal>,
    /// ATCUD document code.
    pub document_code: Option<String>,
    /// Issuer name from the first non-blank line.
    pub issuer_name: Option<String>,
}

/// Run every field rule over the text. First match wins per field.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let fields = ExtractedFields {
        tax_id: TaxIdRule.extract(text),
        date: DateRule.extract(text),
        total: TotalRule.extract(text),
        document_code: DocumentCodeRule.extract(text),
        issuer_name: IssuerNameRule.extract(text),
    };

    debug!(
        tax_id = fields.tax_id.is_some(),
        date = fields.date.is_some(),
        total = fields.total.is_some(),
        document_code = fields.document_code.is_some(),
        issuer_name = fields.issuer_name.is_some(),
        "field extraction complete"
    );

    fields
}
