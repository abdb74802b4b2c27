use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// Identifier for a registered taxpayer.
pub type TaxpayerId = i64;

/// Immutable registration record for a taxpayer.
///
/// Created once at registration; the engine only ever reads it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerSnapshot {
    pub id: TaxpayerId,
    pub filing_status: FilingStatus,
    pub age: u32,
    pub dependents: u32,
    pub tax_year: i32,
    pub created_at: DateTime<Utc>,
}

/// Registration input (no timestamp; filing status as a raw numeric code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaxpayer {
    pub id: TaxpayerId,
    pub filing_status: u8,
    pub age: u32,
    pub dependents: u32,
    pub tax_year: i32,
}
