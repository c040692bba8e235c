//! NIF (tax number) extraction.

use super::patterns::TAX_ID;
use super::FieldRule;

/// Extracts the first 9-digit run bounded by non-digits.
///
/// No checksum validation is applied: OCR noise makes strict NIF
/// check-digit enforcement reject too many genuine documents, and the
/// record enters review anyway.
pub struct TaxIdRule;

impl FieldRule for TaxIdRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        TAX_ID.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        TAX_ID
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
