//! # Money Module
//!
//! Provides the `Money` type for every rupee amount in the fleet: trip
//! revenue, maintenance cost, fuel price and fuel totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing fuel bills as floats:                                          │
//! │    551.5 + 882.4 + ... drifts by fractions of a paisa per addition     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    55150 + 88240 = 143390 paise, exactly                               │
//! │    Only ROI and liters × price touch floating point, and they round    │
//! │    explicitly                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fleet_core::money::Money;
//!
//! let oil_change = Money::from_major(3500);
//! let brake_pads = Money::from_major_minor(8200, 50);
//!
//! let total = oil_change + brake_pads;
//! assert_eq!(total.minor(), 1_170_050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit (revenue − cost) may be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as the raw integer** so front ends never parse floats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    ///
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let fuel = Money::from_minor(55150); // ₹551.50
    /// assert_eq!(fuel.major(), 551);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is −₹5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Like [`Money::from_major_minor`] for non-negative input, `None` when
    /// the amount does not fit in paise.
    ///
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_major_minor(52000, 5), Some(Money::from_minor(5_200_005)));
    /// assert_eq!(Money::checked_from_major_minor(i64::MAX / 10, 0), None);
    /// ```
    pub fn checked_from_major_minor(major: i64, minor: i64) -> Option<Self> {
        major.checked_mul(100)?.checked_add(minor).map(Money)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a fractional quantity (liters of fuel).
    ///
    /// The product is rounded half away from zero to the nearest paisa.
    ///
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let diesel = Money::from_major_minor(110, 30); // ₹110.30 / L
    /// assert_eq!(diesel.times_quantity(5.0).minor(), 55150);
    /// assert_eq!(diesel.times_quantity(0.333).minor(), 3673);
    /// ```
    pub fn times_quantity(&self, quantity: f64) -> Money {
        Money((self.0 as f64 * quantity).round() as i64)
    }

    /// Ratio of two amounts as a float, `None` when the divisor is zero.
    pub fn ratio(&self, divisor: Money) -> Option<f64> {
        if divisor.is_zero() {
            None
        } else {
            Some(self.0 as f64 / divisor.0 as f64)
        }
    }

    /// Whole rupees, rounded half away from zero.
    ///
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(55150).rounded_major(), 552);
    /// assert_eq!(Money::from_minor(88240).rounded_major(), 882);
    /// assert_eq!(Money::from_minor(-550).rounded_major(), -6);
    /// ```
    #[inline]
    pub const fn rounded_major(&self) -> i64 {
        if self.0 >= 0 {
            (self.0 + 50) / 100
        } else {
            (self.0 - 50) / 100
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering; callers with a configured currency use
/// `FleetConfig::format_currency` instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            self.major().abs(),
            self.minor_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(95, 50).minor(), 9550);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
        assert_eq!(Money::from_major(85000).minor(), 8_500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(55150).to_string(), "₹551.50");
        assert_eq!(Money::from_minor(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);
        assert_eq!((a + b).minor(), 150_000);
        assert_eq!((b - a).minor(), -50_000);

        let bills = [Money::from_minor(55150), Money::from_minor(88240)];
        let total: Money = bills.iter().sum();
        assert_eq!(total.minor(), 143_390);
    }

    #[test]
    fn test_times_quantity_rounds_to_paisa() {
        let price = Money::from_major_minor(95, 50);
        assert_eq!(price.times_quantity(120.0), Money::from_major(11460));
        assert_eq!(price.times_quantity(0.5).minor(), 4775);
    }

    #[test]
    fn test_ratio_guards_zero_divisor() {
        assert_eq!(Money::from_major(10).ratio(Money::zero()), None);
        assert_eq!(
            Money::from_major(10).ratio(Money::from_major(4)),
            Some(2.5)
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(Money::from_minor(-1).is_negative());
        assert!(Money::from_minor(1).is_positive());
    }
}
