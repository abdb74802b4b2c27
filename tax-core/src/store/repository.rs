use thiserror::Error;

use crate::models::{
    AgeBand, DeductionEntry, FilingStatus, IncomeEntry, StandardDeduction, StrategyResult,
    TaxBracket, TaxpayerId, TaxpayerSnapshot,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("store backend error: {0}")]
    Backend(String),
}

/// The keyed store the engine reads from and writes derived results to.
///
/// Three independent table groups: rate tables (brackets and standard
/// deductions), taxpayer records (snapshots, incomes, deductions), and
/// generated strategies. All mutations are upserts or appends keyed by
/// composite identity; the engine assumes host-serialized callers, so
/// implementations need no transactional guarantees.
pub trait TaxStore: Send + Sync {
    // Rate tables
    /// Upsert keyed by `(filing_status, level)`.
    fn upsert_bracket(&self, bracket: TaxBracket) -> Result<(), StoreError>;

    /// All brackets for a filing status, sorted by level ascending.
    /// An unseeded status yields an empty vector, not an error.
    fn brackets_for_status(&self, status: FilingStatus) -> Result<Vec<TaxBracket>, StoreError>;

    /// Upsert keyed by `(filing_status, age_band)`.
    fn upsert_standard_deduction(&self, deduction: StandardDeduction) -> Result<(), StoreError>;

    fn standard_deduction(
        &self,
        status: FilingStatus,
        age_band: AgeBand,
    ) -> Result<Option<StandardDeduction>, StoreError>;

    // Taxpayer records
    /// Upsert keyed by taxpayer id.
    fn put_taxpayer(&self, taxpayer: TaxpayerSnapshot) -> Result<(), StoreError>;

    fn taxpayer(&self, id: TaxpayerId) -> Result<Option<TaxpayerSnapshot>, StoreError>;

    /// Append; a taxpayer may record any number of income items.
    fn append_income(&self, entry: IncomeEntry) -> Result<(), StoreError>;

    fn incomes(&self, taxpayer_id: TaxpayerId) -> Result<Vec<IncomeEntry>, StoreError>;

    fn append_deduction(&self, entry: DeductionEntry) -> Result<(), StoreError>;

    fn deductions(&self, taxpayer_id: TaxpayerId) -> Result<Vec<DeductionEntry>, StoreError>;

    // Generated strategies
    /// Upsert keyed by `(taxpayer_id, strategy.id)`.
    fn upsert_strategy(
        &self,
        taxpayer_id: TaxpayerId,
        strategy: StrategyResult,
    ) -> Result<(), StoreError>;

    fn strategy(
        &self,
        taxpayer_id: TaxpayerId,
        strategy_id: u32,
    ) -> Result<Option<StrategyResult>, StoreError>;

    /// All strategies for a taxpayer, sorted by strategy id ascending.
    fn strategies(&self, taxpayer_id: TaxpayerId) -> Result<Vec<StrategyResult>, StoreError>;
}
