use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// A monetary amount as given on a load request. No rounding is applied to the parsed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    /// Parses an amount such as `"$3318.47"`. A single leading `$` is optional.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let digits = string.strip_prefix('$').unwrap_or(string);

        let value: f64 = digits
            .parse()
            .map_err(|_| MoneyError::Parse("Not a decimal number", string.to_string()))?;

        return Ok(Money(value));
    }

    pub fn add(&mut self, other: &Self) {
        self.0 += other.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{:.2}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_dollar_prefix() {
        assert_eq!(Money::parse("$3318.47"), Ok(Money(3318.47)));
    }

    #[test]
    fn parse_without_prefix() {
        assert_eq!(Money::parse("5000.00"), Ok(Money(5000.0)));
        assert_eq!(Money::parse("12"), Ok(Money(12.0)));
    }

    #[test]
    fn parse_strips_only_one_prefix() {
        assert!(Money::parse("$$1.00").is_err());
    }

    #[test]
    fn fail_to_parse_invalid_prefix() {
        assert_eq!(
            Money::parse("%5000.00"),
            Err(MoneyError::Parse(
                "Not a decimal number",
                "%5000.00".to_string()
            ))
        );
    }

    #[test]
    fn fail_to_parse_empty() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
    }

    #[test]
    fn add() {
        let mut money = Money(4000.0);
        money.add(&Money(1000.0));

        assert_eq!(money, Money(5000.0));
    }

    #[test]
    fn display() {
        assert_eq!(Money(3318.47).to_string(), "3318.47");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }
}
