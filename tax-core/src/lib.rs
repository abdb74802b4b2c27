//! Core tax calculation and optimization engine.
//!
//! Computes adjusted gross income, progressive-bracket tax liability, and
//! a marginal-rate figure for registered taxpayers, and derives a fixed
//! catalog of optimization strategies with estimated savings. State lives
//! behind the [`TaxStore`] trait; [`engine::TaxEngine`] is the operation
//! surface.

pub mod calculations;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

pub use calculations::{BracketSchedule, TopBracketPolicy};
pub use engine::{CallerId, EngineConfig, TaxEngine};
pub use error::EngineError;
pub use models::*;
pub use store::{StoreError, TaxStore};
