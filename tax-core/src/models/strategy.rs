use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One generated optimization strategy with its estimated savings.
///
/// Strategies are keyed by `(taxpayer_id, id)` in the store; regenerating
/// writes fresh rows over any prior ones with the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub potential_savings: Decimal,
    /// 1 (simple) through 3 (involved).
    pub complexity_level: u8,
    pub is_legal: bool,
}
