//! Progressive bracket schedule: validation and band-by-band tax math.
//!
//! A [`BracketSchedule`] borrows the bracket rows for one filing status,
//! sorted by level. Seeding validates every schedule with
//! [`BracketSchedule::validate`]; afterwards [`BracketSchedule::tax_for`]
//! is the single place the progressive formula lives.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{BracketSchedule, TopBracketPolicy};
//! use tax_core::{FilingStatus, TaxBracket};
//!
//! let brackets = vec![
//!     TaxBracket {
//!         filing_status: FilingStatus::Single,
//!         level: 1,
//!         min_income: dec!(0),
//!         max_income: dec!(11000),
//!         rate_bps: 1000,
//!     },
//!     TaxBracket {
//!         filing_status: FilingStatus::Single,
//!         level: 2,
//!         min_income: dec!(11000),
//!         max_income: dec!(60000),
//!         rate_bps: 1200,
//!     },
//! ];
//!
//! let schedule = BracketSchedule::new(FilingStatus::Single, &brackets);
//! schedule.validate().unwrap();
//!
//! // 11000 × 10% + 39000 × 12% = 5780
//! let tax = schedule.tax_for(dec!(50000), TopBracketPolicy::Truncate).unwrap();
//! assert_eq!(tax, dec!(5780));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{clamp_non_negative, floor_to_dollar};
use crate::error::EngineError;
use crate::models::{FilingStatus, TaxBracket};

/// What to do with income above the highest defined `max_income`.
///
/// The seeded schedules are bounded (no open-ended top band), so this is an
/// explicit policy choice rather than an accident of the data:
///
/// * [`Truncate`](Self::Truncate) — income above the top band is not taxed
///   by the formula. Default; matches the documented test oracle.
/// * [`ExtendTopRate`](Self::ExtendTopRate) — the top band is treated as
///   open-ended and the excess is taxed at its rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopBracketPolicy {
    #[default]
    Truncate,
    ExtendTopRate,
}

fn bps_denominator() -> Decimal {
    Decimal::from(10_000u32)
}

/// The ordered bracket rows for one filing status.
#[derive(Debug, Clone)]
pub struct BracketSchedule<'a> {
    status: FilingStatus,
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    /// Wraps bracket rows that are already sorted by level ascending (the
    /// store returns them that way).
    pub fn new(
        status: FilingStatus,
        brackets: &'a [TaxBracket],
    ) -> Self {
        Self { status, brackets }
    }

    /// Enforces the schedule invariants: at least one band, levels
    /// contiguous from 1, bands starting at zero and abutting exactly
    /// (`max_income(n) == min_income(n+1)`), positive band width, rates
    /// non-decreasing, and every row belonging to this filing status.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSchedule`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidSchedule(format!(
                "no bracket rows for filing status {}",
                self.status.as_str()
            )));
        }

        let mut prev: Option<&TaxBracket> = None;
        for (idx, bracket) in self.brackets.iter().enumerate() {
            let expected_level = idx as u32 + 1;

            if bracket.filing_status != self.status {
                return Err(EngineError::InvalidSchedule(format!(
                    "row {} belongs to filing status {}, expected {}",
                    expected_level,
                    bracket.filing_status.as_str(),
                    self.status.as_str()
                )));
            }
            if bracket.level != expected_level {
                return Err(EngineError::InvalidSchedule(format!(
                    "levels must be contiguous from 1; found level {} at position {}",
                    bracket.level, expected_level
                )));
            }
            if bracket.min_income < Decimal::ZERO || bracket.min_income >= bracket.max_income {
                return Err(EngineError::InvalidSchedule(format!(
                    "level {} has an empty or negative band [{}, {})",
                    bracket.level, bracket.min_income, bracket.max_income
                )));
            }

            match prev {
                None => {
                    if bracket.min_income != Decimal::ZERO {
                        return Err(EngineError::InvalidSchedule(format!(
                            "level 1 must start at 0, found {}",
                            bracket.min_income
                        )));
                    }
                }
                Some(previous) => {
                    if bracket.min_income != previous.max_income {
                        return Err(EngineError::InvalidSchedule(format!(
                            "level {} starts at {} but level {} ends at {}",
                            bracket.level, bracket.min_income, previous.level, previous.max_income
                        )));
                    }
                    if bracket.rate_bps < previous.rate_bps {
                        return Err(EngineError::InvalidSchedule(format!(
                            "rate decreases from {}bps to {}bps at level {}",
                            previous.rate_bps, bracket.rate_bps, bracket.level
                        )));
                    }
                }
            }

            prev = Some(bracket);
        }

        Ok(())
    }

    /// Progressive tax on `taxable_income`, floored to whole dollars.
    ///
    /// Each band contributes `portion × rate_bps / 10000`, where the
    /// portion is `min(taxable, max_income) - min_income`, clamped at
    /// zero. Income exactly equal to a band's `max_income` is taxed
    /// entirely within that band; nothing spills into the next one.
    ///
    /// # Errors
    ///
    /// [`EngineError::BracketNotFound`] if no bands exist for the filing
    /// status.
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
        policy: TopBracketPolicy,
    ) -> Result<Decimal, EngineError> {
        if self.brackets.is_empty() {
            return Err(EngineError::BracketNotFound {
                status: self.status,
            });
        }
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let last_idx = self.brackets.len() - 1;
        let mut total = Decimal::ZERO;

        for (idx, bracket) in self.brackets.iter().enumerate() {
            let upper = if idx == last_idx && policy == TopBracketPolicy::ExtendTopRate {
                taxable_income.max(bracket.max_income)
            } else {
                bracket.max_income
            };

            let portion = clamp_non_negative(taxable_income.min(upper) - bracket.min_income);
            if portion == Decimal::ZERO {
                continue;
            }

            total += portion * Decimal::from(bracket.rate_bps) / bps_denominator();
        }

        Ok(floor_to_dollar(total))
    }
}
