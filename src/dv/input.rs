use crate::ids::{CustomerId, DepositId};
use crate::Deposit;

use chrono::{DateTime, FixedOffset};

use serde::Deserialize;

/// Represents one input line as it deserializes from JSON
#[derive(Deserialize, Debug, Clone)]
pub struct InputDeposit {
    pub id: DepositId,
    pub customer_id: CustomerId,
    pub load_amount: String,
    pub time: DateTime<FixedOffset>,
}

impl InputDeposit {
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    /// The amount is only parsed here, never rejected: the validator decides what a bad amount means
    pub fn into_deposit(self) -> Deposit {
        Deposit::new(self.id, self.customer_id, self.load_amount, self.time)
    }
}

#[cfg(test)]
mod tests {
    use crate::Money;

    use super::*;

    #[test]
    fn parse() {
        let input = InputDeposit::parse(
            r#"{"id":"15887","customer_id":"528","load_amount":"$3318.47","time":"2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(input.id, DepositId::from("15887"));
        assert_eq!(input.customer_id, CustomerId::from("528"));
        assert_eq!(input.load_amount, "$3318.47");
        assert_eq!(input.time.to_rfc3339(), "2000-01-01T00:00:00+00:00");

        assert_eq!(input.into_deposit().amount(), Ok(Money(3318.47)));
    }

    #[test]
    fn parse_keeps_offset() {
        let input = InputDeposit::parse(
            r#"{"id":"1","customer_id":"2","load_amount":"$1.00","time":"2021-01-09T23:30:00-05:00"}"#,
        )
        .unwrap();

        assert_eq!(input.time.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn into_deposit_with_malformed_amount() {
        let input = InputDeposit::parse(
            r#"{"id":"1","customer_id":"2","load_amount":"%5000.00","time":"2021-01-09T00:00:00Z"}"#,
        )
        .unwrap();

        assert!(input.into_deposit().amount().is_err());
    }

    #[test]
    fn fail_to_parse_invalid_json() {
        assert!(InputDeposit::parse("{not json").is_err());
    }

    #[test]
    fn fail_to_parse_missing_field() {
        assert!(InputDeposit::parse(r#"{"id":"1","customer_id":"2","time":"2021-01-09T00:00:00Z"}"#).is_err());
    }

    #[test]
    fn fail_to_parse_invalid_time() {
        assert!(InputDeposit::parse(
            r#"{"id":"1","customer_id":"2","load_amount":"$1.00","time":"yesterday"}"#
        )
        .is_err());
    }
}
