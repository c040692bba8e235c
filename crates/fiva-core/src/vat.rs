//! VAT estimation heuristic.

use rust_decimal::Decimal;

/// Estimate the VAT portion contained in a gross total.
///
/// Returns `total * rate`, or zero for a zero total. The default rate
/// of 0.187 approximates VAT-within-gross for a 23%-dominated expense
/// mix; it is a placeholder used only when no explicit VAT line was
/// recognized, not a reverse calculation of any statutory rate.
pub fn estimate_vat(total: Decimal, rate: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        total * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const DEFAULT_RATE: Decimal = Decimal::from_parts(187, 0, 0, false, 3);

    #[test]
    fn test_zero_total_yields_zero() {
        assert_eq!(estimate_vat(Decimal::ZERO, DEFAULT_RATE), Decimal::ZERO);
    }

    #[test]
    fn test_estimate_is_total_times_rate() {
        let total = Decimal::from_str("45.00").unwrap();
        assert_eq!(
            estimate_vat(total, DEFAULT_RATE),
            Decimal::from_str("8.41500").unwrap()
        );
    }

    #[test]
    fn test_custom_rate() {
        let total = Decimal::from_str("100.00").unwrap();
        let rate = Decimal::from_str("0.06").unwrap();
        assert_eq!(
            estimate_vat(total, rate),
            Decimal::from_str("6.0000").unwrap()
        );
    }
}
