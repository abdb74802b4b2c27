use serde::{Deserialize, Serialize};

/// Filing status for an individual income-tax return.
///
/// Registration requests carry the status as a numeric code (1 through 4,
/// in declaration order); seed schedules use the short string codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl FilingStatus {
    /// Every filing status, in registration-code order.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedJoint,
        Self::MarriedSeparate,
        Self::HeadOfHousehold,
    ];

    /// Numeric registration code (1..=4).
    pub fn code(&self) -> u8 {
        match self {
            Self::Single => 1,
            Self::MarriedJoint => 2,
            Self::MarriedSeparate => 3,
            Self::HeadOfHousehold => 4,
        }
    }

    /// Resolves a numeric registration code; codes outside 1..=4 are `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Single),
            2 => Some(Self::MarriedJoint),
            3 => Some(Self::MarriedSeparate),
            4 => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedJoint => "MFJ",
            Self::MarriedSeparate => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::Single),
            "MFJ" => Some(Self::MarriedJoint),
            "MFS" => Some(Self::MarriedSeparate),
            "HOH" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}
