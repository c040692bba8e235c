//! Regex patterns for Portuguese invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NIF: exactly 9 digits bounded by non-digits on both sides.
    pub static ref TAX_ID: Regex = Regex::new(r"\b\d{9}\b").unwrap();

    // Dates: ISO YYYY-MM-DD, or DD-MM-YYYY / DD/MM/YYYY.
    pub static ref DATE: Regex = Regex::new(
        r"(\d{4}-\d{2}-\d{2})|(\d{2}[/-]\d{2}[/-]\d{4})"
    ).unwrap();

    // Labeled total: "Total 123.45" or "Total: 123,45", exactly two
    // fractional digits.
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)total[:\s]*(\d+[.,]\d{2})"
    ).unwrap();

    // ATCUD document code: AT + series + "-" + sequence number.
    pub static ref DOCUMENT_CODE: Regex = Regex::new(
        r"AT[A-Z0-9]+-[0-9]+"
    ).unwrap();
}
