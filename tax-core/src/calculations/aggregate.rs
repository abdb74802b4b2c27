//! Income and above-line-deduction aggregation over recorded entries.

use rust_decimal::Decimal;

use crate::models::{DeductionEntry, IncomeEntry};

/// Sums the calculators read from a taxpayer's recorded entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTotals {
    /// Sum of amounts over entries marked taxable.
    pub total_income: Decimal,
    /// Sum of amounts over entries marked above-the-line.
    pub above_line_deductions: Decimal,
}

/// Real summation over the recorded entries; non-taxable income and
/// below-the-line deductions are skipped, not subtracted.
pub fn aggregate_entries(
    incomes: &[IncomeEntry],
    deductions: &[DeductionEntry],
) -> IncomeTotals {
    let total_income = incomes
        .iter()
        .filter(|entry| entry.is_taxable)
        .map(|entry| entry.amount)
        .sum();

    let above_line_deductions = deductions
        .iter()
        .filter(|entry| entry.is_above_line)
        .map(|entry| entry.amount)
        .sum();

    IncomeTotals {
        total_income,
        above_line_deductions,
    }
}
