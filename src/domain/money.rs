use crate::error::CashbackError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Represents a monetary value in the single currency unit the engine works with.
///
/// This is a wrapper around `rust_decimal::Decimal` so that cashback arithmetic never
/// touches binary floating point. Totals and results may be of any sign.
///
/// Values are read from and written as their text form, so the scale of the input is kept.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

/// Represents a positive monetary amount for transactions.
///
/// Ensures that transaction sums are always positive, so the calculator never has to
/// decide what cashback on a refund would mean.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Balance", into = "Balance")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, CashbackError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CashbackError::ValidationError(
                "Transaction sum must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Applies a percentage, always as `sum * (percent / 100)`.
    pub fn percent(&self, percent: Decimal) -> Balance {
        Balance(self.0 * (percent / Decimal::ONE_HUNDRED))
    }
}

impl TryFrom<Balance> for Amount {
    type Error = CashbackError;

    fn try_from(value: Balance) -> Result<Self, Self::Error> {
        Self::new(value.0)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Rounds to whole cents, midpoints away from zero. The result always carries
    /// two decimal places.
    pub fn round_to_cents(self) -> Self {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        Self(cents)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
