//! Price type for travel costs
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Text is always rendered with two decimals and a `.` separator
//! (`#0.00`), regardless of locale.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CommandError;

/// A monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Create a price from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero price
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a travel price
    ///
    /// A decimal comma is accepted in place of the point. The value must not
    /// be negative.
    pub fn parse(s: &str) -> Result<Self, CommandError> {
        let price = Self::parse_threshold(s)?;
        if price.is_negative() {
            return Err(CommandError::WrongPrice);
        }
        Ok(price)
    }

    /// Parse a price bound for filtering, where negative values are allowed
    ///
    /// Grammar after comma normalization: `-?\d+(\.\d+)?`. Digits beyond the
    /// second decimal are rounded half-to-even.
    pub fn parse_threshold(s: &str) -> Result<Self, CommandError> {
        let normalized = s.replace(',', ".");

        let (negative, unsigned) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty()
            || !all_digits(whole)
            || !all_digits(fraction)
            || (unsigned.contains('.') && fraction.is_empty())
        {
            return Err(CommandError::WrongPrice);
        }

        let whole: i64 = whole.parse().map_err(|_| CommandError::WrongPrice)?;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents(fraction)))
            .ok_or(CommandError::WrongPrice)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Mean of a set of prices, rounded half-to-even to the cent
    ///
    /// Returns `None` for an empty set.
    pub fn average<I: IntoIterator<Item = Price>>(prices: I) -> Option<Self> {
        let (total, count) = prices
            .into_iter()
            .fold((0i128, 0i128), |(total, count), p| {
                (total + i128::from(p.0), count + 1)
            });

        if count == 0 {
            return None;
        }

        // The mean of i64 values always fits back into an i64
        i64::try_from(div_half_even(total, count)).ok().map(Self)
    }
}

/// Turn the digits after the decimal point into cents, rounding half-to-even
fn fraction_cents(fraction: &str) -> i64 {
    let digit = |i: usize| -> i64 {
        fraction
            .as_bytes()
            .get(i)
            .map(|b| (b - b'0') as i64)
            .unwrap_or(0)
    };

    let cents = digit(0) * 10 + digit(1);
    let rest = fraction.get(2..).unwrap_or("");

    let round_up = match rest.as_bytes().first() {
        None => false,
        Some(b) if *b > b'5' => true,
        Some(b) if *b < b'5' => false,
        // A lone trailing 5 is a tie and goes to the even cent
        Some(_) => rest[1..].bytes().any(|b| b != b'0') || cents % 2 == 1,
    };

    if round_up {
        cents + 1
    } else {
        cents
    }
}

/// Integer division rounding half-to-even
fn div_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
