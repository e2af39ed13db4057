//! Monetary amounts.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Non-negative amount in the smallest currency unit (e.g., cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor_units(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Sum of two amounts, `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Money::default(), Money::ZERO);
        assert!(Money::default().is_zero());
    }

    #[test]
    fn checked_add_sums_and_detects_overflow() {
        let fee = Money::from_minor_units(1_000);
        let payout = Money::from_minor_units(500);
        assert_eq!(fee.checked_add(payout), Some(Money::from_minor_units(1_500)));
        assert_eq!(Money::from_minor_units(u64::MAX).checked_add(payout), None);
    }

    #[test]
    fn displays_major_and_minor_units() {
        assert_eq!(Money::from_minor_units(1_505).to_string(), "15.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }
}
