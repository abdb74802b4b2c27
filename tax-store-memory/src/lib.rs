//! In-process keyed-table implementation of [`TaxStore`].
//!
//! Three independent table groups, each behind its own `RwLock` so the
//! store is shareable across host threads; the engine itself assumes
//! host-serialized callers and never holds more than one lock at a time.
//! Nothing here is durable — this is the "simple keyed store" the engine
//! reads from, not a database.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tax_core::{
    AgeBand, DeductionEntry, FilingStatus, IncomeEntry, StandardDeduction, StoreError,
    StrategyResult, TaxBracket, TaxStore, TaxpayerId, TaxpayerSnapshot,
};

#[derive(Debug, Default)]
struct RateTables {
    brackets: BTreeMap<(FilingStatus, u32), TaxBracket>,
    deductions: BTreeMap<(FilingStatus, AgeBand), StandardDeduction>,
}

#[derive(Debug, Default)]
struct TaxpayerTables {
    snapshots: BTreeMap<TaxpayerId, TaxpayerSnapshot>,
    incomes: BTreeMap<TaxpayerId, Vec<IncomeEntry>>,
    deductions: BTreeMap<TaxpayerId, Vec<DeductionEntry>>,
}

#[derive(Debug, Default)]
struct StrategyTable {
    rows: BTreeMap<(TaxpayerId, u32), StrategyResult>,
}

/// The in-memory store. `Default` starts empty; seed through the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rates: RwLock<RateTables>,
    taxpayers: RwLock<TaxpayerTables>,
    strategies: RwLock<StrategyTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|_| StoreError::Backend("poisoned lock".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|_| StoreError::Backend("poisoned lock".to_string()))
}

impl TaxStore for MemoryStore {
    fn upsert_bracket(&self, bracket: TaxBracket) -> Result<(), StoreError> {
        let mut rates = write(&self.rates)?;
        rates
            .brackets
            .insert((bracket.filing_status, bracket.level), bracket);
        Ok(())
    }

    fn brackets_for_status(&self, status: FilingStatus) -> Result<Vec<TaxBracket>, StoreError> {
        let rates = read(&self.rates)?;
        // Keyed by (status, level), so the range comes back level-ordered.
        Ok(rates
            .brackets
            .range((status, u32::MIN)..=(status, u32::MAX))
            .map(|(_, bracket)| bracket.clone())
            .collect())
    }

    fn upsert_standard_deduction(&self, deduction: StandardDeduction) -> Result<(), StoreError> {
        let mut rates = write(&self.rates)?;
        rates
            .deductions
            .insert((deduction.filing_status, deduction.age_band), deduction);
        Ok(())
    }

    fn standard_deduction(
        &self,
        status: FilingStatus,
        age_band: AgeBand,
    ) -> Result<Option<StandardDeduction>, StoreError> {
        let rates = read(&self.rates)?;
        Ok(rates.deductions.get(&(status, age_band)).cloned())
    }

    fn put_taxpayer(&self, taxpayer: TaxpayerSnapshot) -> Result<(), StoreError> {
        let mut taxpayers = write(&self.taxpayers)?;
        taxpayers.snapshots.insert(taxpayer.id, taxpayer);
        Ok(())
    }

    fn taxpayer(&self, id: TaxpayerId) -> Result<Option<TaxpayerSnapshot>, StoreError> {
        let taxpayers = read(&self.taxpayers)?;
        Ok(taxpayers.snapshots.get(&id).cloned())
    }

    fn append_income(&self, entry: IncomeEntry) -> Result<(), StoreError> {
        let mut taxpayers = write(&self.taxpayers)?;
        taxpayers
            .incomes
            .entry(entry.taxpayer_id)
            .or_default()
            .push(entry);
        Ok(())
    }

    fn incomes(&self, taxpayer_id: TaxpayerId) -> Result<Vec<IncomeEntry>, StoreError> {
        let taxpayers = read(&self.taxpayers)?;
        Ok(taxpayers
            .incomes
            .get(&taxpayer_id)
            .cloned()
            .unwrap_or_default())
    }

    fn append_deduction(&self, entry: DeductionEntry) -> Result<(), StoreError> {
        let mut taxpayers = write(&self.taxpayers)?;
        taxpayers
            .deductions
            .entry(entry.taxpayer_id)
            .or_default()
            .push(entry);
        Ok(())
    }

    fn deductions(&self, taxpayer_id: TaxpayerId) -> Result<Vec<DeductionEntry>, StoreError> {
        let taxpayers = read(&self.taxpayers)?;
        Ok(taxpayers
            .deductions
            .get(&taxpayer_id)
            .cloned()
            .unwrap_or_default())
    }

    fn upsert_strategy(
        &self,
        taxpayer_id: TaxpayerId,
        strategy: StrategyResult,
    ) -> Result<(), StoreError> {
        let mut strategies = write(&self.strategies)?;
        strategies.rows.insert((taxpayer_id, strategy.id), strategy);
        Ok(())
    }

    fn strategy(
        &self,
        taxpayer_id: TaxpayerId,
        strategy_id: u32,
    ) -> Result<Option<StrategyResult>, StoreError> {
        let strategies = read(&self.strategies)?;
        Ok(strategies.rows.get(&(taxpayer_id, strategy_id)).cloned())
    }

    fn strategies(&self, taxpayer_id: TaxpayerId) -> Result<Vec<StrategyResult>, StoreError> {
        let strategies = read(&self.strategies)?;
        Ok(strategies
            .rows
            .range((taxpayer_id, u32::MIN)..=(taxpayer_id, u32::MAX))
            .map(|(_, strategy)| strategy.clone())
            .collect())
    }
}
