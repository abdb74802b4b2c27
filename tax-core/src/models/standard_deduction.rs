use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// Age band for standard-deduction lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Under65,
    SixtyFivePlus,
}

impl AgeBand {
    /// Band for a taxpayer's age; 65 itself falls in [`AgeBand::SixtyFivePlus`].
    pub fn for_age(age: u32) -> Self {
        if age >= 65 {
            Self::SixtyFivePlus
        } else {
            Self::Under65
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under65 => "under65",
            Self::SixtyFivePlus => "65plus",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "under65" => Some(Self::Under65),
            "65plus" => Some(Self::SixtyFivePlus),
            _ => None,
        }
    }
}

/// Standard-deduction amount for one `(filing_status, age_band)` pair.
///
/// The seed data populates Single and MarriedJoint explicitly; lookups for
/// any other status fall back to the Single/Under65 amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDeduction {
    pub filing_status: FilingStatus,
    pub age_band: AgeBand,
    pub amount: Decimal,
}
