//! The `TaxEngine` facade: every externally visible operation.
//!
//! The engine owns no state of its own beyond configuration; it computes
//! over an explicit [`TaxStore`] handed to the constructor. All operations
//! are synchronous and deterministic, and every mutation is an upsert or
//! append keyed by composite identity, so repeating a call converges
//! rather than accumulating.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculations::aggregate::aggregate_entries;
use crate::calculations::common::{clamp_non_negative, floor_to_dollar};
use crate::calculations::schedule::{BracketSchedule, TopBracketPolicy};
use crate::calculations::strategy::STRATEGY_CATALOG;
use crate::error::EngineError;
use crate::models::{
    AgeBand, DeductionEntry, FilingStatus, IncomeEntry, NewTaxpayer, StandardDeduction,
    StrategyResult, TaxBracket, TaxSummary, TaxpayerId, TaxpayerSnapshot,
};
use crate::store::TaxStore;

/// Identifier of the caller invoking a privileged operation.
pub type CallerId = i64;

/// Earliest tax year a registration may reference.
const MIN_TAX_YEAR: i32 = 2020;

/// Income bump used by the marginal-rate calculator.
fn marginal_income_step() -> Decimal {
    Decimal::from(1000u32)
}

/// Engine configuration. The top-bracket policy is deliberately explicit:
/// the seeded schedules are bounded, and whether income above the top band
/// is taxed is a data-policy decision, not something to guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub top_bracket_policy: TopBracketPolicy,
}

/// Facade over the keyed store; see the module docs.
pub struct TaxEngine {
    store: Arc<dyn TaxStore>,
    owner: CallerId,
    config: EngineConfig,
}

impl TaxEngine {
    /// Engine with the default configuration (bounded top bracket).
    ///
    /// `owner` is the single caller allowed to seed the rate tables.
    pub fn new(
        store: Arc<dyn TaxStore>,
        owner: CallerId,
    ) -> Self {
        Self::with_config(store, owner, EngineConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn TaxStore>,
        owner: CallerId,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            owner,
            config,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    // ────────────────────────────────────────────────────────────────────
    // administrative bootstrap
    // ────────────────────────────────────────────────────────────────────

    /// Seeds the bracket and standard-deduction tables.
    ///
    /// Restricted to the owner configured at construction. Each per-status
    /// bracket schedule is validated before anything is written; statuses
    /// with no rows at all are permitted (their lookups later fail with
    /// the recoverable `BracketNotFound`). Rows are upserts keyed by
    /// `(status, level)` and `(status, age_band)`, so re-seeding is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// * [`EngineError::Unauthorized`] — caller is not the owner.
    /// * [`EngineError::InvalidSchedule`] — a schedule violates the
    ///   bracket invariants; nothing is written.
    pub fn seed_brackets(
        &self,
        caller: CallerId,
        brackets: &[TaxBracket],
        deductions: &[StandardDeduction],
    ) -> Result<usize, EngineError> {
        if caller != self.owner {
            warn!(caller, "rejected bracket seeding by non-owner");
            return Err(EngineError::Unauthorized);
        }

        for status in FilingStatus::ALL {
            let mut rows: Vec<TaxBracket> = brackets
                .iter()
                .filter(|bracket| bracket.filing_status == status)
                .cloned()
                .collect();
            if rows.is_empty() {
                continue;
            }
            rows.sort_by_key(|bracket| bracket.level);
            BracketSchedule::new(status, &rows).validate()?;
        }

        let mut seeded = 0;
        for bracket in brackets {
            self.store.upsert_bracket(bracket.clone())?;
            seeded += 1;
        }
        for deduction in deductions {
            self.store.upsert_standard_deduction(deduction.clone())?;
            seeded += 1;
        }

        info!(seeded, "seeded rate tables");
        Ok(seeded)
    }

    // ────────────────────────────────────────────────────────────────────
    // registration and record entry
    // ────────────────────────────────────────────────────────────────────

    /// Registers a taxpayer after validating the boundary fields.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTaxpayer`] for a filing-status code outside
    /// 1..=4, an age of zero, or a tax year before 2020.
    pub fn register_taxpayer(
        &self,
        new: NewTaxpayer,
    ) -> Result<TaxpayerSnapshot, EngineError> {
        let Some(filing_status) = FilingStatus::from_code(new.filing_status) else {
            return Err(EngineError::InvalidTaxpayer(format!(
                "filing status code {} is outside 1..=4",
                new.filing_status
            )));
        };
        if new.age == 0 {
            return Err(EngineError::InvalidTaxpayer(
                "age must be positive".to_string(),
            ));
        }
        if new.tax_year < MIN_TAX_YEAR {
            return Err(EngineError::InvalidTaxpayer(format!(
                "tax year {} is before {MIN_TAX_YEAR}",
                new.tax_year
            )));
        }

        let snapshot = TaxpayerSnapshot {
            id: new.id,
            filing_status,
            age: new.age,
            dependents: new.dependents,
            tax_year: new.tax_year,
            created_at: Utc::now(),
        };
        self.store.put_taxpayer(snapshot.clone())?;

        debug!(taxpayer_id = new.id, "registered taxpayer");
        Ok(snapshot)
    }

    /// Records an income item.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidIncome`] — amount is zero or negative.
    /// * [`EngineError::InvalidTaxpayer`] — taxpayer is not registered.
    pub fn add_income(
        &self,
        taxpayer_id: TaxpayerId,
        amount: Decimal,
        source: impl Into<String>,
        is_taxable: bool,
    ) -> Result<IncomeEntry, EngineError> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidIncome(format!(
                "amount must be positive, got {amount}"
            )));
        }
        self.require_taxpayer(taxpayer_id)?;

        let entry = IncomeEntry {
            taxpayer_id,
            amount,
            source: source.into(),
            is_taxable,
            created_at: Utc::now(),
        };
        self.store.append_income(entry.clone())?;
        Ok(entry)
    }

    /// Records a deduction item.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidDeduction`] — amount is zero or negative.
    /// * [`EngineError::InvalidTaxpayer`] — taxpayer is not registered.
    pub fn add_deduction(
        &self,
        taxpayer_id: TaxpayerId,
        amount: Decimal,
        category: impl Into<String>,
        is_above_line: bool,
    ) -> Result<DeductionEntry, EngineError> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidDeduction(format!(
                "amount must be positive, got {amount}"
            )));
        }
        self.require_taxpayer(taxpayer_id)?;

        let entry = DeductionEntry {
            taxpayer_id,
            amount,
            category: category.into(),
            is_above_line,
            created_at: Utc::now(),
        };
        self.store.append_deduction(entry.clone())?;
        Ok(entry)
    }

    // ────────────────────────────────────────────────────────────────────
    // calculators
    // ────────────────────────────────────────────────────────────────────

    /// Standard deduction for a filing status and age. An exact
    /// `(status, age band)` row wins, any other status falls back to the
    /// Single/Under65 row, and a completely unseeded table yields zero.
    pub fn get_standard_deduction(
        &self,
        status: FilingStatus,
        age: u32,
    ) -> Result<Decimal, EngineError> {
        let age_band = AgeBand::for_age(age);

        if let Some(row) = self.store.standard_deduction(status, age_band)? {
            return Ok(row.amount);
        }
        if let Some(fallback) = self
            .store
            .standard_deduction(FilingStatus::Single, AgeBand::Under65)?
        {
            return Ok(fallback.amount);
        }
        Ok(Decimal::ZERO)
    }

    /// Adjusted gross income: taxable income sum minus above-line
    /// deduction sum, floored at zero (and to whole dollars).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTaxpayer`] if the snapshot is absent.
    pub fn calculate_agi(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<Decimal, EngineError> {
        self.require_taxpayer(taxpayer_id)?;

        let incomes = self.store.incomes(taxpayer_id)?;
        let deductions = self.store.deductions(taxpayer_id)?;
        let totals = aggregate_entries(&incomes, &deductions);

        let agi = floor_to_dollar(clamp_non_negative(
            totals.total_income - totals.above_line_deductions,
        ));
        debug!(taxpayer_id, %agi, "computed AGI");
        Ok(agi)
    }

    /// Progressive tax on `taxable_income` for a filing status, straight
    /// from the bracket schedule (no standard deduction applied here).
    ///
    /// # Errors
    ///
    /// [`EngineError::BracketNotFound`] if the status has no seeded
    /// schedule.
    pub fn calculate_tax_from_brackets(
        &self,
        taxable_income: Decimal,
        status: FilingStatus,
    ) -> Result<Decimal, EngineError> {
        let brackets = self.store.brackets_for_status(status)?;
        BracketSchedule::new(status, &brackets)
            .tax_for(taxable_income, self.config.top_bracket_policy)
    }

    /// Tax liability: AGI less the standard deduction (floored at zero),
    /// run through the bracket schedule.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidTaxpayer`] — unregistered taxpayer.
    /// * [`EngineError::CalculationError`] — wraps a bracket lookup
    ///   failure.
    pub fn calculate_tax_liability(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<Decimal, EngineError> {
        let taxpayer = self.require_taxpayer(taxpayer_id)?;
        let agi = self.calculate_agi(taxpayer_id)?;
        let standard_deduction =
            self.get_standard_deduction(taxpayer.filing_status, taxpayer.age)?;
        let taxable = clamp_non_negative(agi - standard_deduction);

        self.calculate_tax_from_brackets(taxable, taxpayer.filing_status)
            .map_err(EngineError::into_calculation)
    }

    /// Incremental tax cost of $1000 of additional income: tax on
    /// `AGI + 1000` straight from the brackets, minus the liability.
    ///
    /// The bumped side deliberately skips the standard deduction, matching
    /// the established numeric contract, and the result is a dollar delta
    /// per $1000 — downstream strategy math consumes it as if it were a
    /// basis-point rate.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidTaxpayer`] — unregistered taxpayer.
    /// * [`EngineError::CalculationError`] — wraps a bracket lookup
    ///   failure.
    pub fn calculate_marginal_rate(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<Decimal, EngineError> {
        let taxpayer = self.require_taxpayer(taxpayer_id)?;
        let agi = self.calculate_agi(taxpayer_id)?;
        let liability = self.calculate_tax_liability(taxpayer_id)?;

        let bumped = self
            .calculate_tax_from_brackets(agi + marginal_income_step(), taxpayer.filing_status)
            .map_err(EngineError::into_calculation)?;

        Ok(bumped - liability)
    }

    // ────────────────────────────────────────────────────────────────────
    // strategies and summary
    // ────────────────────────────────────────────────────────────────────

    /// Generates the fixed catalog of strategies for a taxpayer and
    /// upserts them by id (a second run overwrites, never accumulates).
    ///
    /// A failed marginal-rate computation is recovered locally as zero
    /// savings rather than propagated — the one deliberate exception to
    /// the propagation policy, so a taxpayer with an unseeded schedule
    /// still gets the catalog.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTaxpayer`] — unregistered taxpayer.
    pub fn generate_optimization_strategies(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<Vec<StrategyResult>, EngineError> {
        self.require_taxpayer(taxpayer_id)?;

        let marginal = match self.calculate_marginal_rate(taxpayer_id) {
            Ok(value) => value,
            Err(err) => {
                warn!(taxpayer_id, %err, "marginal rate unavailable; using zero savings");
                Decimal::ZERO
            }
        };

        let mut results = Vec::with_capacity(STRATEGY_CATALOG.len());
        for definition in &STRATEGY_CATALOG {
            let strategy = definition.estimate(marginal);
            self.store.upsert_strategy(taxpayer_id, strategy.clone())?;
            results.push(strategy);
        }

        debug!(taxpayer_id, count = results.len(), "generated strategies");
        Ok(results)
    }

    /// One previously generated strategy, if present.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTaxpayer`] — unregistered taxpayer.
    pub fn get_optimization_strategy(
        &self,
        taxpayer_id: TaxpayerId,
        strategy_id: u32,
    ) -> Result<Option<StrategyResult>, EngineError> {
        self.require_taxpayer(taxpayer_id)?;
        Ok(self.store.strategy(taxpayer_id, strategy_id)?)
    }

    /// All previously generated strategies, in id order.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTaxpayer`] — unregistered taxpayer.
    pub fn list_optimization_strategies(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<Vec<StrategyResult>, EngineError> {
        self.require_taxpayer(taxpayer_id)?;
        Ok(self.store.strategies(taxpayer_id)?)
    }

    /// The composed read view: AGI, then liability, then marginal rate.
    ///
    /// # Errors
    ///
    /// [`EngineError::CalculationError`] wrapping the first failure in
    /// that order.
    pub fn get_tax_summary(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<TaxSummary, EngineError> {
        let agi = self
            .calculate_agi(taxpayer_id)
            .map_err(EngineError::into_calculation)?;
        let tax_liability = self
            .calculate_tax_liability(taxpayer_id)
            .map_err(EngineError::into_calculation)?;
        let marginal_rate = self
            .calculate_marginal_rate(taxpayer_id)
            .map_err(EngineError::into_calculation)?;

        Ok(TaxSummary {
            agi,
            tax_liability,
            marginal_rate,
        })
    }

    fn require_taxpayer(
        &self,
        taxpayer_id: TaxpayerId,
    ) -> Result<TaxpayerSnapshot, EngineError> {
        self.store.taxpayer(taxpayer_id)?.ok_or_else(|| {
            EngineError::InvalidTaxpayer(format!("no taxpayer registered with id {taxpayer_id}"))
        })
    }
}
