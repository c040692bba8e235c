//! Keyword-driven expense classification.
//!
//! Classification is a priority-ordered decision list: each rule has a
//! case-insensitive keyword set and a fixed outcome, and the first rule
//! with any keyword present wins. There is no scoring and no evidence
//! combination, so the rule order is behaviorally load-bearing: a
//! receipt mentioning both "restaurante" and "gasóleo" is classified
//! personal because the meals rule is checked first.

use tracing::debug;

use crate::models::{ExpenseCategory, TaxField};

/// A single entry in the classification decision list.
struct ClassifierRule {
    /// Lowercase keywords; any substring hit triggers the rule.
    keywords: &'static [&'static str],
    category: ExpenseCategory,
    tax_field: Option<TaxField>,
    justification: &'static str,
}

/// The decision list, checked top to bottom.
const RULES: &[ClassifierRule] = &[
    // Meals and table service: personal, never deductible here.
    ClassifierRule {
        keywords: &["restaurante", "refeição", "mesa"],
        category: ExpenseCategory::Personal,
        tax_field: None,
        justification: "Palavras-chave 'Restaurante/Refeição' encontradas.",
    },
    // Fuel and named fuel retailers.
    ClassifierRule {
        keywords: &["combustível", "gasóleo", "gasolina", "galp", "bp"],
        category: ExpenseCategory::Business,
        tax_field: Some(TaxField::OtherGoodsServices),
        justification: "Palavras-chave de combustível encontradas.",
    },
    // Office supplies.
    ClassifierRule {
        keywords: &["staples", "papel", "escritório"],
        category: ExpenseCategory::Business,
        tax_field: Some(TaxField::OtherGoodsServices),
        justification: "Material de escritório detectado.",
    },
    // Electronics retailers and computer equipment, likely capitalized.
    ClassifierRule {
        keywords: &["worten", "fnac", "computador"],
        category: ExpenseCategory::Business,
        tax_field: Some(TaxField::FixedAssets),
        justification: "Equipamento informático (possível imobilizado).",
    },
];

const FALLBACK_JUSTIFICATION: &str = "Não foi possível determinar a categoria.";

/// Outcome of expense classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Assigned expense category.
    pub category: ExpenseCategory,
    /// Periodic-declaration field, when the category warrants one.
    pub tax_field: Option<TaxField>,
    /// Human-readable reason for the decision.
    pub justification: String,
}

/// Classify invoice text by its domain keywords.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            debug!(category = rule.category.as_str(), "classifier rule matched");
            return Classification {
                category: rule.category,
                tax_field: rule.tax_field,
                justification: rule.justification.to_string(),
            };
        }
    }

    Classification {
        category: ExpenseCategory::Undetermined,
        tax_field: None,
        justification: FALLBACK_JUSTIFICATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_meal_keywords_are_personal() {
        let result = classify("Restaurante Sol\nMenu do dia");
        assert_eq!(result.category, ExpenseCategory::Personal);
        assert_eq!(result.tax_field, None);
    }

    #[test]
    fn test_fuel_keywords_are_business_field_23() {
        let result = classify("GALP Energia\nGasóleo simples 40L");
        assert_eq!(result.category, ExpenseCategory::Business);
        assert_eq!(result.tax_field, Some(TaxField::OtherGoodsServices));
    }

    #[test]
    fn test_office_supplies_field_23() {
        let result = classify("Resma de papel A4");
        assert_eq!(result.category, ExpenseCategory::Business);
        assert_eq!(result.tax_field, Some(TaxField::OtherGoodsServices));
        assert_eq!(result.justification, "Material de escritório detectado.");
    }

    #[test]
    fn test_electronics_field_24() {
        let result = classify("WORTEN\nComputador portátil");
        assert_eq!(result.category, ExpenseCategory::Business);
        assert_eq!(result.tax_field, Some(TaxField::FixedAssets));
    }

    #[test]
    fn test_rule_order_meals_beat_fuel() {
        // Both keyword sets present; the earlier rule must win.
        let result = classify("Restaurante da Bomba\ngasóleo e refeição");
        assert_eq!(result.category, ExpenseCategory::Personal);
        assert_eq!(result.tax_field, None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = classify("RESTAURANTE MARISQUEIRA");
        assert_eq!(result.category, ExpenseCategory::Personal);
    }

    #[test]
    fn test_no_keywords_is_undetermined() {
        let result = classify("Talho do bairro\nCarne de vaca");
        assert_eq!(result.category, ExpenseCategory::Undetermined);
        assert_eq!(result.tax_field, None);
        assert_eq!(result.justification, FALLBACK_JUSTIFICATION);
    }
}
