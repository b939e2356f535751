//! Fixed-point currency type with exactly 2 decimal places.
//!
//! Uses `rust_decimal` internally so that whole-dollar and quarter checks,
//! and the per-item point ceiling, are exact rather than float-dependent.
//! Amounts whose mantissa cannot widen to 2 fractional digits are rejected.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a string cannot be read as [`Money`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoneyError {
    #[error("not a decimal number: {0}")]
    Parse(#[from] rust_decimal::Error),

    #[error("amount must not be negative")]
    Negative,

    #[error("amount has more than 2 fractional digits")]
    TooPrecise,

    #[error("amount is too large to hold 2 fractional digits")]
    TooLarge,
}

/// A non-negative currency amount held at exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use receipt_processor::Money;
///
/// let amount = Money::from_str("9").unwrap();
/// assert_eq!(amount.to_string(), "9.00");
/// assert!(amount.is_whole());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Builds an amount from a count of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, Self::SCALE))
    }

    /// Returns the amount as an integer count of cents.
    pub fn cents(&self) -> i128 {
        // Scale is pinned to 2 on construction.
        self.0.mantissa()
    }

    /// Returns `true` if the amount has no cents component.
    pub fn is_whole(&self) -> bool {
        self.cents() % 100 == 0
    }

    /// Returns `true` if the amount is an exact multiple of `step`.
    pub fn is_multiple_of(&self, step: Money) -> bool {
        step.cents() != 0 && self.cents() % step.cents() == 0
    }

    /// Multiplies by `factor` and rounds up to the next whole unit.
    ///
    /// Negative results clamp to zero and results past `u64::MAX` saturate.
    pub fn ceil_scaled(&self, factor: Decimal) -> u64 {
        match self.0.checked_mul(factor).map(|d| d.ceil()) {
            Some(d) if d.is_sign_negative() => 0,
            Some(d) => d.to_u64().unwrap_or(u64::MAX),
            None => u64::MAX,
        }
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut decimal = Decimal::from_str(s.trim())?;
        if decimal.is_sign_negative() && !decimal.is_zero() {
            return Err(MoneyError::Negative);
        }
        if decimal.scale() > Self::SCALE {
            return Err(MoneyError::TooPrecise);
        }
        // rescale leaves the scale untouched when the mantissa would overflow
        decimal.rescale(Self::SCALE);
        if decimal.scale() != Self::SCALE {
            return Err(MoneyError::TooLarge);
        }
        decimal.set_sign_positive(true);
        Ok(Money(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
