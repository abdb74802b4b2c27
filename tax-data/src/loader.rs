use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::engine::CallerId;
use tax_core::{AgeBand, EngineError, FilingStatus, StandardDeduction, TaxBracket, TaxEngine};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while parsing or loading seed schedules.
#[derive(Debug, Error)]
pub enum SeedLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown filing status code '{0}'")]
    UnknownStatusCode(String),

    #[error("unknown age band '{0}' (expected 'under65' or '65plus')")]
    UnknownAgeBand(String),

    #[error("engine rejected the seed: {0}")]
    Engine(#[from] EngineError),
}

impl From<csv::Error> for SeedLoaderError {
    fn from(err: csv::Error) -> Self {
        SeedLoaderError::CsvParse(err.to_string())
    }
}

/// A single row from a bracket schedule CSV.
///
/// Columns: `status` (S, MFJ, MFS, HOH), `level` (1-based, contiguous per
/// status), `min_income`, `max_income`, `rate_bps` (integer basis points).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub status: String,
    pub level: u32,
    pub min_income: Decimal,
    pub max_income: Decimal,
    pub rate_bps: u32,
}

/// A single row from a standard-deduction CSV.
///
/// Columns: `status`, `age_band` (`under65` or `65plus`), `amount`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeductionRecord {
    pub status: String,
    pub age_band: String,
    pub amount: Decimal,
}

/// Parses seed schedules from CSV and pushes them through the engine's
/// privileged seeding operation. The loader only maps rows to model types;
/// schedule invariants are the engine's job.
pub struct SeedLoader;

impl SeedLoader {
    /// Parse bracket rows from any CSV reader.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<TaxBracket>, SeedLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut brackets = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            let filing_status = FilingStatus::parse(&record.status)
                .ok_or_else(|| SeedLoaderError::UnknownStatusCode(record.status.clone()))?;

            brackets.push(TaxBracket {
                filing_status,
                level: record.level,
                min_income: record.min_income,
                max_income: record.max_income,
                rate_bps: record.rate_bps,
            });
        }

        Ok(brackets)
    }

    /// Parse standard-deduction rows from any CSV reader.
    pub fn parse_deductions<R: Read>(
        reader: R
    ) -> Result<Vec<StandardDeduction>, SeedLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut deductions = Vec::new();

        for result in csv_reader.deserialize() {
            let record: DeductionRecord = result?;
            let filing_status = FilingStatus::parse(&record.status)
                .ok_or_else(|| SeedLoaderError::UnknownStatusCode(record.status.clone()))?;
            let age_band = AgeBand::parse(&record.age_band)
                .ok_or_else(|| SeedLoaderError::UnknownAgeBand(record.age_band.clone()))?;

            deductions.push(StandardDeduction {
                filing_status,
                age_band,
                amount: record.amount,
            });
        }

        Ok(deductions)
    }

    /// Seed an engine's rate tables as the given caller.
    ///
    /// Seeding is an upsert keyed by `(status, level)` and `(status,
    /// age band)`, so loading the same schedules twice converges.
    ///
    /// # Errors
    ///
    /// Propagates the engine's `Unauthorized` and `InvalidSchedule`
    /// rejections.
    pub fn load(
        engine: &TaxEngine,
        caller: CallerId,
        brackets: &[TaxBracket],
        deductions: &[StandardDeduction],
    ) -> Result<usize, SeedLoaderError> {
        let seeded = engine.seed_brackets(caller, brackets, deductions)?;
        info!(seeded, "loaded seed schedules into the engine");
        Ok(seeded)
    }
}
