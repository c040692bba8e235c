//! Issuer name heuristic.

use super::FieldRule;

const NAME_MAX_CHARS: usize = 50;

/// Takes the first non-blank line as the issuer name, truncated to 50
/// characters. Receipts almost always open with the merchant name.
pub struct IssuerNameRule;

fn clip(line: &str) -> String {
    line.chars().take(NAME_MAX_CHARS).collect::<String>().trim().to_string()
}

impl FieldRule for IssuerNameRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        text.lines().find(|l| !l.trim().is_empty()).map(clip)
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|l| !l.trim().is_empty())
            .map(clip)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_non_blank_line() {
        assert_eq!(
            IssuerNameRule.extract("\n  \nRestaurante Sol\nNIF 501234567"),
            Some("Restaurante Sol".to_string())
        );
    }

    #[test]
    fn test_long_line_truncated() {
        let text = "A".repeat(80);
        assert_eq!(IssuerNameRule.extract(&text), Some("A".repeat(50)));
    }

    #[test]
    fn test_blank_text_yields_none() {
        assert_eq!(IssuerNameRule.extract("   \n\t\n"), None);
        assert_eq!(IssuerNameRule.extract(""), None);
    }
}
