//! Calculation building blocks for the tax engine.
//!
//! The progressive-bracket math lives in [`schedule`], entry aggregation in
//! [`aggregate`], and the strategy catalog in [`strategy`]; the
//! [`TaxEngine`](crate::engine::TaxEngine) composes them over the store.

pub mod aggregate;
pub mod common;
pub mod schedule;
pub mod strategy;

pub use aggregate::{IncomeTotals, aggregate_entries};
pub use schedule::{BracketSchedule, TopBracketPolicy};
pub use strategy::{STRATEGY_CATALOG, StrategyDefinition};
