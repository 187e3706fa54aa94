use crate::error::PayoutError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in minor currency units (e.g. cents for USD).
///
/// This is the only amount representation the admission logic works
/// with: no implicit currency conversion happens anywhere below the
/// interfaces layer. Negative amounts are unrepresentable; zero is a
/// valid amount (only an upper bound is enforced on payouts).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, Hash,
)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Converts a major-unit amount (e.g. `120.00` dollars) to minor
    /// units. Fails on negative amounts and on fractions of a minor
    /// unit.
    pub fn from_major(value: Decimal) -> Result<Self, PayoutError> {
        let minor = value * dec!(100);
        if minor < Decimal::ZERO {
            return Err(PayoutError::ValidationError(format!(
                "amount must not be negative: {value}"
            )));
        }
        if minor != minor.trunc() {
            return Err(PayoutError::ValidationError(format!(
                "amount has a fraction of a minor unit: {value}"
            )));
        }
        minor.to_u64().map(Self).ok_or_else(|| {
            PayoutError::ValidationError(format!("amount out of range: {value}"))
        })
    }
}

impl TryFrom<Decimal> for MinorUnits {
    type Error = PayoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_major(value)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
