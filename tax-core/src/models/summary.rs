use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Combined read view over the three calculators.
///
/// `marginal_rate` is the dollar delta per $1000 of additional income, not
/// a percentage; see [`crate::engine::TaxEngine::calculate_marginal_rate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub agi: Decimal,
    pub tax_liability: Decimal,
    pub marginal_rate: Decimal,
}
