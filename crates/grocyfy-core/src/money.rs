//! # Money Module
//!
//! Provides `Amount` for what the user types (prices, budgets) and `Money`
//! for what the list shows (totals, line totals).
//!
//! ## Why Two Types?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    2.10 × 3 = 6.300000000000001  ❌ needs rounding after every sum     │
//! │                                                                         │
//! │  OUR SOLUTION: Integers at two scales                                   │
//! │    Amount: millionths, exactly as typed    "0.333" = 333_000           │
//! │    Money:  cents, what gets displayed       $1.00  = 100               │
//! │                                                                         │
//! │    total = round2( Σ price × quantity )                                 │
//! │    Rounding happens ONCE, on the exact sum. 0.333 × 3 is $1.00,        │
//! │    not 3 × $0.33.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocyfy_core::money::{Amount, Money};
//!
//! let gum = Amount::parse("0.333", "price").unwrap();
//! assert_eq!(Money::round_total([(gum, 3)]).to_string(), "$1.00");
//! assert_eq!(gum.to_money().to_string(), "$0.33");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

use crate::error::ValidationError;

/// Fraction digits an `Amount` keeps.
pub const AMOUNT_DECIMALS: u32 = 6;

const MICROS_PER_UNIT: i64 = 1_000_000;
const MICROS_PER_CENT: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "2.50" (text input) ──► Amount::parse ──► LineItem.price              │
/// │                                              │                          │
/// │                               × quantity ────┤                          │
/// │                                              ▼                          │
/// │                                  Money::round_total ──► ListStore.total │
/// │                                                              │          │
/// │  "5" (budget input) ──► Amount ──► compared against ─────────┘          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use grocyfy_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Sums `amount × quantity` exactly, then rounds half-up to cents.
    ///
    /// ```rust
    /// use grocyfy_core::money::{Amount, Money};
    ///
    /// let bolt = Amount::parse("0.125", "price").unwrap();
    /// assert_eq!(Money::round_total([(bolt, 10)]).cents(), 125);
    /// assert_eq!(Money::round_total([(bolt, 1)]).cents(), 13);
    /// ```
    ///
    /// The exact sum is held in 128 bits; a result beyond `i64` cents
    /// saturates.
    pub fn round_total<I>(lines: I) -> Money
    where
        I: IntoIterator<Item = (Amount, i64)>,
    {
        let exact = lines.into_iter().fold(0i128, |acc, (amount, qty)| {
            acc.saturating_add(i128::from(amount.micros()) * i128::from(qty))
        });

        let half = i128::from(MICROS_PER_CENT / 2);
        let cents = if exact < 0 {
            exact.saturating_sub(half) / i128::from(MICROS_PER_CENT)
        } else {
            exact.saturating_add(half) / i128::from(MICROS_PER_CENT)
        };

        let cents = cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        Money(cents as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the amount with exactly two decimals and no symbol.
    ///
    /// ```rust
    /// use grocyfy_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).to_decimal_string(), "2.50");
    /// assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Shows money as `$X.YY`, always two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Amount Type
// =============================================================================

/// An entered price or budget, in millionths of the currency unit.
///
/// Keeps the digits the user typed (up to six decimals) so totals can be
/// rounded once, after summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from whole cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents.saturating_mul(MICROS_PER_CENT))
    }

    /// Parses user-entered text into a non-negative amount.
    ///
    /// ## Accepted Input
    /// - Surrounding whitespace is ignored
    /// - Digits with an optional single `.` (`"3"`, `"2.50"`, `".5"`, `"4."`)
    /// - An optional leading `+` or `-` (`"-0"` is zero)
    ///
    /// Digits past the sixth decimal round half-up on the seventh.
    ///
    /// ## Errors
    /// - `Required` when the input is blank
    /// - `InvalidFormat` when it is not a plain decimal number or overflows
    /// - `Negative` when it is below zero
    ///
    /// `field` names the input in the error (`"price"`, `"budget"`).
    pub fn parse(input: &str, field: &str) -> Result<Amount, ValidationError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        let (negative, body) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (body, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid("not a number"));
        }

        let mut units: i64 = 0;
        for digit in whole.bytes() {
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(i64::from(digit - b'0')))
                .ok_or_else(|| invalid("too large"))?;
        }

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let mut micros: i64 = 0;
        for _ in 0..AMOUNT_DECIMALS {
            micros = micros * 10 + fraction_digits.next().unwrap_or(0);
        }
        let round_up = fraction_digits.next().map_or(0, |d| i64::from(d >= 5));

        let micros = units
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|u| u.checked_add(micros + round_up))
            .ok_or_else(|| invalid("too large"))?;

        if negative && micros != 0 {
            return Err(ValidationError::Negative {
                field: field.to_string(),
            });
        }

        Ok(Amount(micros))
    }

    /// Returns the value in millionths.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Rounds half-up to cents for display.
    pub fn to_money(self) -> Money {
        Money::round_total([(self, 1)])
    }
}

/// Plain decimal text with at least two decimals and no trailing zeros
/// beyond that: `2.50`, `0.333`, `0.00001`.
///
/// This is the text a price input field is seeded with when an item enters
/// edit mode, so committing it unchanged keeps the price as it was.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_unit = MICROS_PER_UNIT.unsigned_abs();

        let mut fraction = format!("{:06}", magnitude % per_unit);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }
        write!(f, "{}{}.{}", sign, magnitude / per_unit, fraction)
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount::from_cents(money.cents())
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
