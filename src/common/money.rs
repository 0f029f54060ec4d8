use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Number of stored units per whole currency unit (four decimal places).
const SCALE: i64 = 10_000;
/// Stored units per displayed cent.
const UNITS_PER_CENT: i64 = SCALE / 100;
/// Decimal places kept in storage.
const SCALE_DIGITS: i64 = 4;
/// Whole-unit digits that always fit: `i64::MAX / SCALE` is about 9.2e14.
const MAX_INTEGER_DIGITS: i64 = 15;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as a fixed-point integer with four decimal places.
///
/// Keeping money as an integer avoids the drift that floating point sums pick
/// up over a long transaction log, while still representing fractional cents.
/// Display is rounded to two decimal places (half away from zero).
///
/// # Examples
/// ```
/// use teller::common::money::Money;
///
/// let amount: Money = "250.505".parse().unwrap();
/// assert_eq!(amount.as_i64(), 2_505_050);
/// assert_eq!(amount.to_string_2dp(), "250.51");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Builds a value from whole currency units.
    ///
    /// # Panics
    ///
    /// Panics if `units` is outside `i64::MAX / 10_000` in either direction.
    /// Amounts from user input go through [`FromStr`](std::str::FromStr), which
    /// reports overflow as an error instead.
    pub fn from_units(units: i64) -> Self {
        match units.checked_mul(SCALE) {
            Some(value) => Money(value),
            None => panic!("{units} currency units overflow Money"),
        }
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let raw = i128::from(self.0);
        let unit = i128::from(UNITS_PER_CENT);
        let mut cents = raw / unit;
        if (raw % unit).abs() * 2 >= unit {
            cents += raw.signum();
        }
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        if bd.is_zero() {
            return Ok(Money::zero());
        }

        // Decide out-of-range magnitudes from the digit count and exponent, so
        // an input like `1e999999999` never materialises its full integer.
        // The magnitude lies in [10^(order - 1), 10^order).
        let (int, exponent) = bd.as_bigint_and_exponent();
        let digits = int.magnitude().to_string().len() as i64;
        let order = digits.saturating_sub(exponent);
        if order.saturating_sub(1) >= MAX_INTEGER_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        if order < -SCALE_DIGITS {
            // below 10^-5, rounds to zero at 4 dp
            return Ok(Money::zero());
        }

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}
