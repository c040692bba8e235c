//! Ledger record models compatible with the legacy bookkeeping exports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single invoice entry in the VAT ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Unique identifier, assigned at creation and stable afterwards.
    pub id: String,

    /// Issuer tax number (NIF), 9 ASCII digits. The sentinel
    /// `999999990` marks an unresolved extraction.
    pub issuer_tax_id: String,

    /// Issuer name, or the `Desconhecido (OCR)` placeholder.
    pub issuer_name: String,

    /// Document date in normalized `YYYY-MM-DD` shape. Extraction does
    /// not calendar-validate, so an OCR-mangled date passes through.
    pub date: String,

    /// Gross document total (VAT included).
    pub gross_total: Decimal,

    /// Estimated or reviewer-confirmed VAT portion.
    pub estimated_tax: Decimal,

    /// ATCUD document code, or a generated `AT-OCR-<n>` placeholder.
    pub document_code: String,

    /// Review lifecycle status.
    pub status: RecordStatus,

    /// Expense category.
    pub category: ExpenseCategory,

    /// Periodic-declaration field code. Must be absent for personal
    /// expenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_field: Option<TaxField>,

    /// Reliability of the automatic extraction (0.0 - 1.0).
    pub confidence: f32,

    /// Human-readable explanation of how category and tax field were
    /// derived.
    pub justification: String,

    /// Truncated excerpt of the source text.
    pub items_summary: String,

    /// Fiscal period tag, e.g. `Q1_2025`.
    pub period: String,
}

impl LedgerRecord {
    /// Check the record invariants and return any violations found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.confidence) {
            issues.push(format!("confidence out of range: {}", self.confidence));
        }

        if self.gross_total < Decimal::ZERO {
            issues.push(format!("negative gross total: {}", self.gross_total));
        }

        if self.estimated_tax < Decimal::ZERO {
            issues.push(format!("negative estimated tax: {}", self.estimated_tax));
        }

        if self.category == ExpenseCategory::Personal && self.tax_field.is_some() {
            issues.push("personal expense carries a tax field code".to_string());
        }

        issues
    }
}

/// Review lifecycle status of a ledger record.
///
/// Automatic pipeline output always enters as `NeedsReview`; only a
/// reviewer's save moves a record to `Approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Awaiting processing (legacy seed data only).
    #[serde(rename = "pendente")]
    Pending,
    /// Built automatically, awaiting human review.
    #[serde(rename = "revisao_necessaria")]
    NeedsReview,
    /// Confirmed by a reviewer.
    #[serde(rename = "aprovado")]
    Approved,
    /// Rejected by a reviewer.
    #[serde(rename = "rejeitado")]
    Rejected,
}

impl RecordStatus {
    /// Legacy wire value, used verbatim in the CSV export.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pendente",
            RecordStatus::NeedsReview => "revisao_necessaria",
            RecordStatus::Approved => "aprovado",
            RecordStatus::Rejected => "rejeitado",
        }
    }
}

/// Expense category assigned by classification or review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Deductible business activity expense.
    #[serde(rename = "actividade")]
    Business,
    /// Personal expense, never deductible.
    #[serde(rename = "pessoal")]
    Personal,
    /// Mixed use (reviewer-assigned only).
    #[serde(rename = "misto")]
    Mixed,
    /// Classification could not determine a category.
    #[serde(rename = "pendente")]
    Undetermined,
}

impl ExpenseCategory {
    /// Legacy wire value, used verbatim in the CSV export.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Business => "actividade",
            ExpenseCategory::Personal => "pessoal",
            ExpenseCategory::Mixed => "misto",
            ExpenseCategory::Undetermined => "pendente",
        }
    }
}

/// Field codes of the Portuguese periodic VAT declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaxField {
    /// Campo 20 - Existências 6%
    Stock6,
    /// Campo 21 - Existências 13%
    Stock13,
    /// Campo 22 - Existências 23%
    Stock23,
    /// Campo 23 - Outros Bens e Serviços
    OtherGoodsServices,
    /// Campo 24 - Activo Imobilizado
    FixedAssets,
}

impl TaxField {
    /// Numeric declaration field code.
    pub fn code(&self) -> u8 {
        match self {
            TaxField::Stock6 => 20,
            TaxField::Stock13 => 21,
            TaxField::Stock23 => 22,
            TaxField::OtherGoodsServices => 23,
            TaxField::FixedAssets => 24,
        }
    }

    /// Human-readable declaration label.
    pub fn label(&self) -> &'static str {
        match self {
            TaxField::Stock6 => "Campo 20 - Existências 6%",
            TaxField::Stock13 => "Campo 21 - Existências 13%",
            TaxField::Stock23 => "Campo 22 - Existências 23%",
            TaxField::OtherGoodsServices => "Campo 23 - Outros Bens e Serviços",
            TaxField::FixedAssets => "Campo 24 - Activo Imobilizado",
        }
    }
}

impl From<TaxField> for u8 {
    fn from(field: TaxField) -> Self {
        field.code()
    }
}

impl TryFrom<u8> for TaxField {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            20 => Ok(TaxField::Stock6),
            21 => Ok(TaxField::Stock13),
            22 => Ok(TaxField::Stock23),
            23 => Ok(TaxField::OtherGoodsServices),
            24 => Ok(TaxField::FixedAssets),
            other => Err(format!("unknown tax field code: {}", other)),
        }
    }
}
