mod filing_status;
mod income;
mod standard_deduction;
mod strategy;
mod summary;
mod tax_bracket;
mod taxpayer;

pub use filing_status::FilingStatus;
pub use income::{DeductionEntry, IncomeEntry};
pub use standard_deduction::{AgeBand, StandardDeduction};
pub use strategy::StrategyResult;
pub use summary::TaxSummary;
pub use tax_bracket::TaxBracket;
pub use taxpayer::{NewTaxpayer, TaxpayerId, TaxpayerSnapshot};
