//! Document date extraction.

use super::patterns::DATE;
use super::FieldRule;

/// Extracts the first date-shaped substring and normalizes `/` to `-`.
///
/// The matched value is passed through without calendar validation:
/// `99-99-9999` survives normalization unchanged. Impossible dates are
/// caught by the human reviewer, not here.
pub struct DateRule;

fn normalize(raw: &str) -> String {
    raw.replace('/', "-")
}

impl FieldRule for DateRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        DATE.find(text).map(|m| normalize(m.as_str()))
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        DATE.find_iter(text).map(|m| normalize(m.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iso_date() {
        assert_eq!(
            DateRule.extract("Data: 2025-02-03"),
            Some("2025-02-03".to_string())
        );
    }

    #[test]
    fn test_slash_separated_date_is_normalized() {
        assert_eq!(
            DateRule.extract("Data 03/02/2025"),
            Some("03-02-2025".to_string())
        );
    }

    #[test]
    fn test_dash_separated_dmy() {
        assert_eq!(
            DateRule.extract("emitida a 03-02-2025"),
            Some("03-02-2025".to_string())
        );
    }

    #[test]
    fn test_malformed_date_passes_through() {
        // Known limitation: no calendar validation.
        assert_eq!(
            DateRule.extract("data 99/99/9999"),
            Some("99-99-9999".to_string())
        );
    }

    #[test]
    fn test_no_date_yields_none() {
        assert_eq!(DateRule.extract("Total: 10,00"), None);
    }
}
