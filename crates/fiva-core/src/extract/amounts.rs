//! Gross total extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::TOTAL_LABELED;
use super::FieldRule;

/// Extracts the first amount labeled with the word "Total".
///
/// Accepts both `.` and `,` as the decimal separator and requires
/// exactly two fractional digits, the dominant shape on Portuguese
/// receipts.
pub struct TotalRule;

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', ".")).ok()
}

impl FieldRule for TotalRule {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Decimal> {
        TOTAL_LABELED
            .captures(text)
            .and_then(|caps| parse_amount(&caps[1]))
    }

    fn extract_all(&self, text: &str) -> Vec<Decimal> {
        TOTAL_LABELED
            .captures_iter(text)
            .filter_map(|caps| parse_amount(&caps[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(TotalRule.extract("Total: 12,34"), Some(dec("12.34")));
    }

    #[test]
    fn test_dot_decimal_separator() {
        assert_eq!(TotalRule.extract("Total 12.34"), Some(dec("12.34")));
    }

    #[test]
    fn test_case_insensitive_label() {
        assert_eq!(TotalRule.extract("TOTAL:  45,00 EUR"), Some(dec("45.00")));
    }

    #[test]
    fn test_unlabeled_amount_ignored() {
        assert_eq!(TotalRule.extract("IVA 2,34\nvalor 12,34"), None);
    }

    #[test]
    fn test_first_total_wins() {
        assert_eq!(
            TotalRule.extract("Total: 10,00\nTotal: 20,00"),
            Some(dec("10.00"))
        );
        assert_eq!(
            TotalRule.extract_all("Total: 10,00\nTotal: 20,00"),
            vec![dec("10.00"), dec("20.00")]
        );
    }
}
