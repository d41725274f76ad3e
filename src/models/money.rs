//! Money type for representing currency amounts
//!
//! Internally stores amounts in paise (i64 hundredths of a rupee) to avoid
//! floating-point precision issues. Provides safe arithmetic operations and
//! formatting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbol used for all display output
pub const CURRENCY_SYMBOL: &str = "₹";

// ₹1,00,00,00,00,000 (one trillion). Six budgets or a few thousand
// transactions at this size still sum well inside i64.
const MAX_CENTS: i64 = 100_000_000_000_000;

/// Represents a monetary amount stored as hundredths of the currency unit
///
/// Persisted as a plain decimal JSON number (`250`, `12.5`) so stored records
/// stay readable, but all arithmetic happens on the integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input or storage
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use financeflow::models::Money;
    /// let amount = Money::from_cents(1050); // ₹10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use financeflow::models::Money;
    /// let amount = Money::from_units(250); // ₹250.00
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a floating-point value, rounding to the
    /// nearest hundredth. Returns `None` for NaN, infinite or out-of-range
    /// input.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check if the amount is beyond [`Money::MAX`] in either direction
    pub const fn exceeds_limit(&self) -> bool {
        self.0.unsigned_abs() > MAX_CENTS as u64
    }

    /// The amount as a floating-point number of whole units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Round to whole units, halves rounding up
    pub fn round_units(&self) -> i64 {
        (self.as_f64() + 0.5).floor() as i64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "10", "1,23,456.75".
    /// Digits beyond the second decimal place are truncated. Amounts beyond
    /// [`Money::MAX`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s).trim();
        let s: String = s.chars().filter(|c| *c != ',').collect();

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        if s.is_empty() {
            return Err(invalid());
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let too_large = || MoneyParseError::TooLarge(original.trim().to_string());

        // Only digits remain, so a failed parse means the value overflowed
        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };

        // Pad or truncate to 2 digits
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_CENTS)
            .ok_or_else(too_large)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Render as a bare decimal string without currency symbol or grouping,
    /// dropping trailing zeros ("50000", "1234.5")
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, units),
            c if c % 10 == 0 => format!("{}{}.{}", sign, units, c / 10),
            c => format!("{}{}.{:02}", sign, units, c),
        }
    }

    /// Format rounded to whole units with Indian digit grouping ("₹1,23,457")
    pub fn format_whole(&self) -> String {
        let rounded = self.round_units();
        let sign = if rounded < 0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            CURRENCY_SYMBOL,
            group_indian(rounded.unsigned_abs())
        )
    }
}

/// Group digits the Indian way: the last three, then pairs ("12,34,567")
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            group_indian(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {}", value)))
    }
}

// Arithmetic saturates: an overflowing total pins at the i64 bounds, which
// still compares greater than any income.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount too large: '{}' (limit {})", s, Money::MAX.format_whole())
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "₹10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "₹0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-₹10.50");
        assert_eq!(format!("{}", Money::from_units(1234567)), "₹12,34,567.00");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::from_units(250).format_whole(), "₹250");
        assert_eq!(Money::from_cents(123456750).format_whole(), "₹12,34,568");
        assert_eq!(Money::from_units(50000).format_whole(), "₹50,000");
        assert_eq!(Money::from_units(-1500).format_whole(), "-₹1,500");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100000), "1,00,000");
        assert_eq!(group_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1,23,456").unwrap().cents(), 12345600);
        assert_eq!(Money::parse("12.999").unwrap().cents(), 1299);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.é").is_err());
    }

    #[test]
    fn test_parse_enforces_limit() {
        assert_eq!(Money::parse("1000000000000").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_from_f64_enforces_limit() {
        assert_eq!(Money::from_f64(1e12), Some(Money::MAX));
        assert_eq!(Money::from_f64(9e16), None);
        assert_eq!(Money::from_f64(f64::NAN), None);

        let stored: Result<Money, _> = serde_json::from_str("90000000000000000");
        assert!(stored.is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!((huge + Money::MAX).cents(), i64::MAX);
        assert_eq!((-huge - Money::MAX).cents(), i64::MIN);

        let total: Money = [huge, huge, huge].iter().sum();
        assert!(total > Money::MAX);
        assert!(total.exceeds_limit());
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(Money::from_units(50000).to_decimal_string(), "50000");
        assert_eq!(Money::from_cents(123450).to_decimal_string(), "1234.5");
        assert_eq!(Money::from_cents(123405).to_decimal_string(), "1234.05");
        assert_eq!(
            Money::parse(&Money::from_cents(9907).to_decimal_string()).unwrap(),
            Money::from_cents(9907)
        );
    }

    #[test]
    fn test_round_units() {
        assert_eq!(Money::from_cents(250).round_units(), 3);
        assert_eq!(Money::from_cents(249).round_units(), 2);
        assert_eq!(Money::from_cents(-250).round_units(), -2);
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_units(250)).unwrap(), "250");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let whole: Money = serde_json::from_str("20000").unwrap();
        assert_eq!(whole, Money::from_units(20000));

        let fractional: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(fractional.cents(), 9999);
    }
}
