//! ATCUD document code extraction.

use super::patterns::DOCUMENT_CODE;
use super::FieldRule;

/// Extracts the first ATCUD-shaped identifier (`AT` + series + `-` +
/// sequence number).
pub struct DocumentCodeRule;

impl FieldRule for DocumentCodeRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        DOCUMENT_CODE.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        DOCUMENT_CODE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
