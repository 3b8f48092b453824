//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    330 * (1100 / 1000) = 363.00000000000006  ❌                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer rupees, integer rounding                         │
//! │    (330 * 1100 + 500) / 1000 = 363                                     │
//! │    Exact for every quantity, no drift between screens                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use marts_core::money::Money;
//! use marts_core::types::RatePerThousand;
//!
//! let price = RatePerThousand::new(270).price_for(2000).unwrap();
//! assert_eq!(price, Money::from_rupees(540));
//! assert_eq!(price.to_string(), "540 Rs");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::RatePerThousand;
use crate::CURRENCY_LABEL;

/// Units of quantity a catalog rate is quoted against.
pub const RATE_UNIT: i64 = 1000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// The storefront never shows fractional rupees, so the smallest unit is
/// the rupee itself. Fractions that arise from odd quantities are rounded
/// once, in [`Money::for_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use marts_core::money::Money;
    ///
    /// let price = Money::from_rupees(1470);
    /// assert_eq!(price.rupees(), 1470);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums amounts, `None` if the total does not fit.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Prices `quantity` units at `rate` rupees per [`RATE_UNIT`].
    ///
    /// ## Rounding: Round Half Up
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  rate × quantity / 1000, rounded to the nearest rupee              │
    /// │                                                                     │
    /// │  Ties (exactly .5) round UP:                                        │
    /// │    0.5 → 1, 1.5 → 2, 2.5 → 3                                       │
    /// │                                                                     │
    /// │  Integer form: (rate × quantity + 500) / 1000                       │
    /// │  Inputs are never negative, so "up" and "away from zero" agree.    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Returns `None` when the rounded price does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use marts_core::money::Money;
    ///
    /// assert_eq!(Money::for_quantity(370, 2000).unwrap().rupees(), 740);
    /// assert_eq!(Money::for_quantity(1, 500).unwrap().rupees(), 1);   // 0.5 → 1
    /// assert_eq!(Money::for_quantity(1, 499).unwrap().rupees(), 0);   // 0.499 → 0
    /// assert!(Money::for_quantity(1100, i64::MAX).is_none());
    /// ```
    pub fn for_quantity(rate: i64, quantity: i64) -> Option<Money> {
        // Any i64 × i64 product fits in i128
        let scaled = i128::from(rate) * i128::from(quantity);
        let half = i128::from(RATE_UNIT / 2);
        let rounded = (scaled + half) / i128::from(RATE_UNIT);
        i64::try_from(rounded).ok().map(Money::from_rupees)
    }

    /// Prices `quantity` units at a catalog rate.
    #[inline]
    pub fn at_rate(rate: RatePerThousand, quantity: i64) -> Option<Money> {
        Money::for_quantity(rate.rupees(), quantity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as the transcript does: `"1470 Rs"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY_LABEL)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_currency_label() {
        assert_eq!(format!("{}", Money::from_rupees(540)), "540 Rs");
        assert_eq!(format!("{}", Money::zero()), "0 Rs");
    }

    fn price(rate: i64, quantity: i64) -> i64 {
        Money::for_quantity(rate, quantity).unwrap().rupees()
    }

    #[test]
    fn test_for_quantity_exact_thousands() {
        assert_eq!(price(270, 1000), 270);
        assert_eq!(price(270, 2000), 540);
        assert_eq!(price(1100, 10000), 11000);
        assert_eq!(price(330, 1100), 363);
    }

    #[test]
    fn test_for_quantity_rounds_half_up() {
        // 370 * 1.5 = 555 exactly
        assert_eq!(price(370, 1500), 555);
        // 250 * 0.001 = 0.25 → 0
        assert_eq!(price(250, 1), 0);
        // 250 * 0.002 = 0.5 → 1
        assert_eq!(price(250, 2), 1);
        // 270 * 3.5 = 945 exactly
        assert_eq!(price(270, 3500), 945);
        // 1 * 1.499 = 1.499 → 1
        assert_eq!(price(1, 1499), 1);
        // 333 * 1.5 = 499.5 → 500
        assert_eq!(price(333, 1500), 500);
    }

    #[test]
    fn test_for_quantity_zero() {
        assert!(Money::for_quantity(1100, 0).unwrap().is_zero());
    }

    #[test]
    fn test_for_quantity_out_of_range() {
        assert_eq!(Money::for_quantity(1200, i64::MAX), None);
        assert_eq!(Money::for_quantity(1000, i64::MAX), Some(Money::from_rupees(i64::MAX)));
        // i64::MAX / 1000, rounded
        assert_eq!(price(1, i64::MAX), 9_223_372_036_854_776);
    }

    #[test]
    fn test_checked_add_and_sum() {
        let total = Money::checked_sum([Money::from_rupees(270), Money::from_rupees(1200)]);
        assert_eq!(total, Some(Money::from_rupees(1470)));
        assert_eq!(Money::checked_sum(std::iter::empty()), Some(Money::zero()));

        assert_eq!(
            Money::from_rupees(i64::MAX).checked_add(Money::from_rupees(1)),
            None
        );
        assert_eq!(
            Money::checked_sum([Money::from_rupees(i64::MAX), Money::from_rupees(1)]),
            None
        );
    }
}
