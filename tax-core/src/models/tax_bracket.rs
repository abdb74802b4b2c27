use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// One band of a progressive tax schedule.
///
/// Brackets are keyed by `(filing_status, level)`. Within a filing status,
/// levels are contiguous starting at 1, each band's `max_income` equals the
/// next band's `min_income`, and `rate_bps` is non-decreasing in level.
/// Rates are integer basis points (10000 = 100%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub filing_status: FilingStatus,
    pub level: u32,
    pub min_income: Decimal,
    pub max_income: Decimal,
    pub rate_bps: u32,
}
