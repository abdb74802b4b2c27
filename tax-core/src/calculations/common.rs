//! Shared numeric helpers for the calculators.

use rust_decimal::Decimal;

/// Drops any fractional part, toward negative infinity.
///
/// Every dollar figure the engine reports (AGI, liability, savings) is a
/// whole-dollar amount; intermediate band math keeps full precision and is
/// floored once at the end.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::floor_to_dollar;
///
/// assert_eq!(floor_to_dollar(dec!(7627.50)), dec!(7627));
/// assert_eq!(floor_to_dollar(dec!(581.80)), dec!(581));
/// assert_eq!(floor_to_dollar(dec!(1000)), dec!(1000));
/// ```
pub fn floor_to_dollar(value: Decimal) -> Decimal {
    value.floor()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value to zero or above.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(-3850)), dec!(0));
/// assert_eq!(clamp_non_negative(dec!(41150)), dec!(41150));
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}
