use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxpayerId;

/// A recorded income item for one taxpayer.
///
/// Only entries with `is_taxable` set count toward total income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub taxpayer_id: TaxpayerId,
    pub amount: Decimal,
    pub source: String,
    pub is_taxable: bool,
    pub created_at: DateTime<Utc>,
}

/// A recorded deduction item for one taxpayer.
///
/// Only entries with `is_above_line` set are subtracted before AGI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionEntry {
    pub taxpayer_id: TaxpayerId,
    pub amount: Decimal,
    pub category: String,
    pub is_above_line: bool,
    pub created_at: DateTime<Utc>,
}
