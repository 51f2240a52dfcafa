//! Fixed-point currency arithmetic.
//!
//! Every value that reaches a limit, a spend total or the output is finalised
//! at [`SCALE`] decimal places with half-up rounding. Percentage steps keep two
//! extra digits before that final rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Decimal places of a finalised currency value.
pub const SCALE: u32 = 2;

/// Digits kept while a percentage is still being computed.
const WORKING_SCALE: u32 = SCALE + 2;

/// Java-style `HALF_UP`: ties round away from zero.
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` so that order values,
/// limits and spend totals cannot be mixed up with bare percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to [`SCALE`] places and pins the scale, so `90` becomes `90.00`.
    pub fn finalized(&self) -> Self {
        let mut rounded = self.0.round_dp_with_strategy(SCALE, ROUNDING);
        rounded.rescale(SCALE);
        Self(rounded)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.finalized().0)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

fn is_valid_percent(percent: i32) -> bool {
    (0..=100).contains(&percent)
}

/// `value * percent / 100` at the working scale, then finalised.
fn scaled_share(value: Money, percent: i32) -> Money {
    let share = (value.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(WORKING_SCALE, ROUNDING)
        .round_dp_with_strategy(SCALE, ROUNDING);
    Money(share)
}

/// Returns `percent`% of `value`, e.g. `percentage(200.00, 10) == 20.00`.
///
/// A percent outside `0..=100` yields zero.
pub fn percentage(value: Money, percent: i32) -> Money {
    if !is_valid_percent(percent) {
        return Money::ZERO;
    }
    scaled_share(value, percent)
}

/// Returns what is left to pay after a `percent`% discount on `value`.
///
/// A percent outside `0..=100` leaves `value` untouched.
pub fn apply_discount(value: Money, percent: i32) -> Money {
    if !is_valid_percent(percent) {
        return value;
    }
    scaled_share(value, 100 - percent)
}

/// Returns the currency amount a `percent`% discount saves on `value`.
///
/// A percent outside `0..=100` yields zero.
pub fn discount_amount(value: Money, percent: i32) -> Money {
    if !is_valid_percent(percent) {
        return Money::ZERO;
    }
    value - apply_discount(value, percent)
}

/// The smaller of two optional amounts; a missing operand yields the other.
pub fn min(a: Option<Money>, b: Option<Money>) -> Option<Money> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
