//! The embedded 2023 seed schedules.
//!
//! Single carries four bands and MarriedJoint three; MarriedSeparate and
//! HeadOfHousehold ship no bands at all. That asymmetry is a known gap in
//! the source data, kept as-is: lookups for the missing statuses surface
//! the recoverable `BracketNotFound` instead of being papered over.
//! Standard deductions are likewise only explicit for Single and
//! MarriedJoint; every other status falls back to the Single/Under65
//! amount inside the engine.

use tax_core::{StandardDeduction, TaxBracket};

use crate::loader::{SeedLoader, SeedLoaderError};

pub const TAX_BRACKETS_2023_CSV: &str = include_str!("../data/tax_brackets_2023.csv");
pub const STANDARD_DEDUCTIONS_2023_CSV: &str =
    include_str!("../data/standard_deductions_2023.csv");

/// The 2023 bracket schedules, parsed from the embedded CSV.
pub fn brackets_2023() -> Result<Vec<TaxBracket>, SeedLoaderError> {
    SeedLoader::parse_brackets(TAX_BRACKETS_2023_CSV.as_bytes())
}

/// The 2023 standard-deduction table, parsed from the embedded CSV.
pub fn standard_deductions_2023() -> Result<Vec<StandardDeduction>, SeedLoaderError> {
    SeedLoader::parse_deductions(STANDARD_DEDUCTIONS_2023_CSV.as_bytes())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tax_core::FilingStatus;

    use super::*;

    #[test]
    fn catalog_brackets_parse_with_the_documented_shape() {
        let brackets = brackets_2023().expect("embedded CSV should parse");

        let single = brackets
            .iter()
            .filter(|b| b.filing_status == FilingStatus::Single)
            .count();
        let joint = brackets
            .iter()
            .filter(|b| b.filing_status == FilingStatus::MarriedJoint)
            .count();

        assert_eq!(brackets.len(), 7);
        assert_eq!(single, 4);
        assert_eq!(joint, 3);
    }

    #[test]
    fn catalog_has_no_rows_for_the_gap_statuses() {
        let brackets = brackets_2023().expect("embedded CSV should parse");

        assert!(!brackets.iter().any(|b| matches!(
            b.filing_status,
            FilingStatus::MarriedSeparate | FilingStatus::HeadOfHousehold
        )));
    }

    #[test]
    fn catalog_deductions_cover_single_and_joint_only() {
        let deductions = standard_deductions_2023().expect("embedded CSV should parse");

        assert_eq!(deductions.len(), 4);
        assert!(deductions.iter().all(|d| matches!(
            d.filing_status,
            FilingStatus::Single | FilingStatus::MarriedJoint
        )));
    }
}
