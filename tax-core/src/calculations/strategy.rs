//! The fixed catalog of optimization strategies.
//!
//! Each strategy's estimated savings is `floor(fixed_base × marginal /
//! 10000)`, where `marginal` is the dollar delta per $1000 of additional
//! income from the marginal-rate calculator. The delta is consumed here as
//! if it were a basis-point rate; that unit mismatch is a documented part
//! of the numeric contract, carried forward deliberately.

use rust_decimal::Decimal;

use crate::calculations::common::floor_to_dollar;
use crate::models::StrategyResult;

/// A catalog entry: everything about a strategy except the savings, which
/// depend on the taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyDefinition {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Whole-dollar base the marginal value is applied to.
    pub fixed_base: u32,
    pub complexity_level: u8,
}

/// The three strategies produced on every invocation, in id order.
pub const STRATEGY_CATALOG: [StrategyDefinition; 3] = [
    StrategyDefinition {
        id: 1,
        name: "Maximize 401k Contributions",
        description: "Contribute up to the annual 401k limit to reduce taxable income",
        fixed_base: 22500,
        complexity_level: 1,
    },
    StrategyDefinition {
        id: 2,
        name: "Tax Loss Harvesting",
        description: "Realize investment losses to offset taxable gains",
        fixed_base: 5000,
        complexity_level: 2,
    },
    StrategyDefinition {
        id: 3,
        name: "Charitable Contributions",
        description: "Donate to qualified charities and deduct the contribution",
        fixed_base: 2000,
        complexity_level: 1,
    },
];

impl StrategyDefinition {
    /// Materializes the strategy with savings estimated from the marginal
    /// value. Callers that could not compute a marginal value pass
    /// `Decimal::ZERO` and get zero savings.
    pub fn estimate(
        &self,
        marginal_value: Decimal,
    ) -> StrategyResult {
        let savings =
            floor_to_dollar(Decimal::from(self.fixed_base) * marginal_value / Decimal::from(10_000u32));

        StrategyResult {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            potential_savings: savings,
            complexity_level: self.complexity_level,
            is_legal: true,
        }
    }
}
