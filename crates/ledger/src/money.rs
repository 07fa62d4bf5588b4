use std::{
    fmt,
    ops::{Add, AddAssign},
    str::FromStr,
};

use crate::ParseError;

/// Money amount represented as **integer paise** (minor units).
///
/// Use this type for **all** monetary values (record amounts, totals) to
/// avoid floating-point drift. User input is non-negative, so sums of records
/// never go below zero; the representation stays an `i64` so realistic
/// ledger sizes cannot wrap.
///
/// # Examples
///
/// ```rust
/// use ledger::Money;
///
/// let amount = Money::from_minor(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input rounds beyond-paise precision to the nearest
/// minor unit, half away from zero, rather than truncating:
///
/// ```rust
/// use ledger::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("9.999".parse::<Money>().unwrap().minor(), 1000);
/// assert!("12.3.4".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    /// Formats as a decimal with exactly two fractional digits, the integer
    /// part grouped in the Indian convention (last three digits, then pairs).
    ///
    /// No currency symbol; the presentation layer owns that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rupees = abs / 100;
        let paise = abs % 100;
        write!(f, "{sign}{}.{paise:02}", group_indian(rupees))
    }
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl FromStr for Money {
    type Err = ParseError;

    /// Parses a user-entered decimal string into minor units.
    ///
    /// Accepts an optional leading `+`, surrounding whitespace, and a missing
    /// integer or fractional part (`".5"`, `"45."`). Rejects empty input,
    /// negative amounts, anything but ASCII digits and a single `.`, and
    /// values that overflow `i64` minor units. Digits beyond the second
    /// fractional place round to the nearest minor unit, half away from zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let invalid = || ParseError::Invalid(trimmed.to_string());
        let overflow = || ParseError::TooLarge(trimmed.to_string());

        if trimmed.starts_with('-') {
            return Err(ParseError::Negative(trimmed.to_string()));
        }
        let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let mut parts = rest.split('.');
        let whole = parts.next().unwrap_or("");
        let frac = parts.next().unwrap_or("");
        if parts.next().is_some() {
            return Err(invalid());
        }
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };

        let paise: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac.parse::<i64>().map_err(|_| invalid())?,
            _ => {
                // Keep two digits, round on the third. The tail past the
                // third digit cannot move the result across the halfway
                // point, so one digit decides.
                let kept = frac[..2].parse::<i64>().map_err(|_| invalid())?;
                if frac.as_bytes()[2] >= b'5' {
                    kept + 1
                } else {
                    kept
                }
            }
        };

        let total = rupees
            .checked_mul(100)
            .and_then(|v| v.checked_add(paise))
            .ok_or_else(overflow)?;

        Ok(Money(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_two_decimals() {
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(1).to_string(), "0.01");
        assert_eq!(Money::from_minor(10).to_string(), "0.10");
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
    }

    #[test]
    fn display_groups_indian_style() {
        assert_eq!(Money::from_minor(100_000).to_string(), "1,000.00");
        assert_eq!(Money::from_minor(12_345_678_95).to_string(), "12,34,567.95");
        assert_eq!(Money::from_minor(10_00_00_000_00).to_string(), "10,00,00,000.00");
    }

    #[test]
    fn parse_accepts_plain_decimals() {
        assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().minor(), 1050);
        assert_eq!("12.50".parse::<Money>().unwrap().minor(), 1250);
        assert_eq!("+1.00".parse::<Money>().unwrap().minor(), 100);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().minor(), 230);
        assert_eq!(".5".parse::<Money>().unwrap().minor(), 50);
        assert_eq!("45.".parse::<Money>().unwrap().minor(), 4500);
    }

    #[test]
    fn parse_rounds_half_away_from_zero() {
        assert_eq!("9.999".parse::<Money>().unwrap().minor(), 1000);
        assert_eq!("0.005".parse::<Money>().unwrap().minor(), 1);
        assert_eq!("2.004".parse::<Money>().unwrap().minor(), 200);
        assert_eq!("2.0049".parse::<Money>().unwrap().minor(), 200);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(ParseError::Empty));
        assert!(matches!("abc".parse::<Money>(), Err(ParseError::Invalid(_))));
        assert!(matches!("1e2".parse::<Money>(), Err(ParseError::Invalid(_))));
        assert!(matches!("12.3.4".parse::<Money>(), Err(ParseError::Invalid(_))));
        assert!(matches!(".".parse::<Money>(), Err(ParseError::Invalid(_))));
        assert!(matches!("-1".parse::<Money>(), Err(ParseError::Negative(_))));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(matches!(
            "92233720368547758079".parse::<Money>(),
            Err(ParseError::TooLarge(_))
        ));
    }

    #[test]
    fn round_trips_display() {
        for input in ["12.50", "0.01", "999.99", "45.00"] {
            let money: Money = input.parse().unwrap();
            assert_eq!(money.to_string(), input);
        }
    }
}
