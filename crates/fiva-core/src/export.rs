//! Legacy CSV export.
//!
//! The output must stay byte-for-byte compatible with the exports the
//! original spreadsheet workflow consumes: UTF-8 BOM prefix, semicolon
//! delimiter, double-quoted issuer name, amounts with `,` as decimal
//! separator and two fractional digits, Portuguese wire values for
//! category and status. Because of the fixed quoting scheme a general
//! CSV writer cannot reproduce it, so the rows are formatted directly.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::LedgerRecord;

/// Byte-order mark so spreadsheet tools pick up UTF-8.
const BOM: &str = "\u{feff}";
const HEADER: &str = "ID;Data;Emitente;NIF;Total;IVA;Classificação;Campo IVA;Status";

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded).replace('.', ",")
}

/// Render records as the legacy semicolon-delimited CSV document.
pub fn export_csv(records: &[LedgerRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());

    for record in records {
        // The issuer name is quoted to survive embedded separators;
        // names containing a double quote are not escaped, matching the
        // legacy exporter.
        lines.push(format!(
            "{};{};\"{}\";{};{};{};{};{};{}",
            record.id,
            record.date,
            record.issuer_name,
            record.issuer_tax_id,
            format_amount(record.gross_total),
            format_amount(record.estimated_tax),
            record.category.as_str(),
            record
                .tax_field
                .map(|f| f.code().to_string())
                .unwrap_or_default(),
            record.status.as_str(),
        ));
    }

    format!("{}{}", BOM, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, RecordStatus, TaxField};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn record(name: &str, category: ExpenseCategory, tax_field: Option<TaxField>) -> LedgerRecord {
        LedgerRecord {
            id: "1001".to_string(),
            issuer_tax_id: "501234567".to_string(),
            issuer_name: name.to_string(),
            date: "2025-01-20".to_string(),
            gross_total: Decimal::from_str("45.00").unwrap(),
            estimated_tax: Decimal::from_str("8.415").unwrap(),
            document_code: "AT1234X-99".to_string(),
            status: RecordStatus::NeedsReview,
            category,
            tax_field,
            confidence: 0.65,
            justification: String::new(),
            items_summary: String::new(),
            period: "Q1_2025".to_string(),
        }
    }

    #[test]
    fn test_export_starts_with_bom_and_header() {
        let csv = export_csv(&[]);
        assert_eq!(
            csv,
            "\u{feff}ID;Data;Emitente;NIF;Total;IVA;Classificação;Campo IVA;Status"
        );
    }

    #[test]
    fn test_row_format_with_tax_field() {
        let csv = export_csv(&[record(
            "Papelaria Sol",
            ExpenseCategory::Business,
            Some(TaxField::OtherGoodsServices),
        )]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1001;2025-01-20;\"Papelaria Sol\";501234567;45,00;8,42;actividade;23;revisao_necessaria"
        );
    }

    #[test]
    fn test_comma_in_name_survives_quoting() {
        let csv = export_csv(&[record(
            "Silva, Lda",
            ExpenseCategory::Personal,
            None,
        )]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Silva, Lda\""));
        // Personal expenses export an empty tax field column.
        assert!(row.ends_with(";pessoal;;revisao_necessaria"));
    }

    #[test]
    fn test_amounts_use_comma_separator() {
        assert_eq!(format_amount(Decimal::from_str("8.415").unwrap()), "8,42");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
        assert_eq!(format_amount(Decimal::from_str("1234.5").unwrap()), "1234,50");
    }
}
