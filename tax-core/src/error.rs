use thiserror::Error;

use crate::models::FilingStatus;
use crate::store::StoreError;

/// Failure taxonomy for every engine operation.
///
/// Validation errors are returned at the boundary; calculation errors
/// propagate upward (AGI → liability → marginal rate → summary), with the
/// summary surfacing the first failure wrapped in
/// [`EngineError::CalculationError`]. The strategy engine is the one
/// exception: it locally substitutes zero savings for a failed marginal
/// rate instead of propagating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Privileged operation attempted by a caller other than the owner.
    #[error("caller is not authorized to seed rate tables")]
    Unauthorized,

    /// Missing or malformed taxpayer reference or registration field.
    #[error("invalid taxpayer: {0}")]
    InvalidTaxpayer(String),

    #[error("invalid income entry: {0}")]
    InvalidIncome(String),

    #[error("invalid deduction entry: {0}")]
    InvalidDeduction(String),

    /// A composed read failed; wraps the first failure encountered.
    #[error("calculation failed")]
    CalculationError(#[source] Box<EngineError>),

    /// No bracket schedule is seeded for the filing status. Recoverable;
    /// never a panic.
    #[error("no tax brackets defined for filing status {}", status.as_str())]
    BracketNotFound { status: FilingStatus },

    /// A seeded schedule violates the bracket invariants.
    #[error("invalid bracket schedule: {0}")]
    InvalidSchedule(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Numeric error code, stable across the operation surface.
    pub fn code(&self) -> u16 {
        match self {
            Self::Unauthorized => 100,
            Self::InvalidTaxpayer(_) => 101,
            Self::InvalidIncome(_) => 102,
            Self::InvalidDeduction(_) => 103,
            Self::CalculationError(_) => 104,
            Self::BracketNotFound { .. } => 105,
            Self::InvalidSchedule(_) => 106,
            Self::Store(_) => 107,
        }
    }

    /// Wraps a composed-read failure, without double-wrapping one that is
    /// already a [`EngineError::CalculationError`].
    pub(crate) fn into_calculation(self) -> Self {
        match self {
            already @ Self::CalculationError(_) => already,
            other => Self::CalculationError(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_match_the_operation_surface() {
        assert_eq!(EngineError::Unauthorized.code(), 100);
        assert_eq!(EngineError::InvalidTaxpayer("x".into()).code(), 101);
        assert_eq!(EngineError::InvalidIncome("x".into()).code(), 102);
        assert_eq!(EngineError::InvalidDeduction("x".into()).code(), 103);
        assert_eq!(
            EngineError::CalculationError(Box::new(EngineError::Unauthorized)).code(),
            104
        );
        assert_eq!(
            EngineError::BracketNotFound {
                status: FilingStatus::HeadOfHousehold
            }
            .code(),
            105
        );
    }

    #[test]
    fn into_calculation_wraps_once() {
        let inner = EngineError::BracketNotFound {
            status: FilingStatus::MarriedSeparate,
        };
        let wrapped = inner.into_calculation();
        let rewrapped = wrapped.into_calculation();

        assert_eq!(
            rewrapped,
            EngineError::CalculationError(Box::new(EngineError::BracketNotFound {
                status: FilingStatus::MarriedSeparate,
            }))
        );
    }
}
