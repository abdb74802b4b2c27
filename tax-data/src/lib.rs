//! Seed catalog and loader for the engine's rate tables.
//!
//! The bracket and standard-deduction schedules ship as embedded CSV in
//! [`catalog`]; [`SeedLoader`] parses schedules (embedded or external)
//! and pushes them through the engine's privileged seeding operation.

pub mod catalog;
pub mod loader;

pub use loader::{BracketRecord, DeductionRecord, SeedLoader, SeedLoaderError};
