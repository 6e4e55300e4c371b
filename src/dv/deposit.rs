use crate::ids::{CustomerId, DepositId, DepositKey};
use crate::money::{Money, MoneyError};

use chrono::{DateTime, Datelike, FixedOffset, IsoWeek, NaiveDate};

/// Deposit represents a request to load funds into a customer account
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    id: DepositId,
    customer_id: CustomerId,
    load_amount: String,
    time: DateTime<FixedOffset>,
    amount: Result<Money, MoneyError>,
}

impl Deposit {
    /// Builds a deposit, remembering whether `load_amount` parsed. A malformed amount is
    /// reported by `amount()` instead of failing construction.
    pub fn new(
        id: DepositId,
        customer_id: CustomerId,
        load_amount: impl Into<String>,
        time: DateTime<FixedOffset>,
    ) -> Self {
        let load_amount = load_amount.into();
        let amount = Money::parse(&load_amount);

        Self {
            id,
            customer_id,
            load_amount,
            time,
            amount,
        }
    }

    pub fn try_new(
        id: DepositId,
        customer_id: CustomerId,
        load_amount: impl Into<String>,
        time: DateTime<FixedOffset>,
    ) -> Result<Self, MoneyError> {
        let deposit = Self::new(id, customer_id, load_amount, time);
        deposit.amount()?;

        Ok(deposit)
    }

    pub fn id(&self) -> &DepositId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn load_amount(&self) -> &str {
        &self.load_amount
    }

    pub fn amount(&self) -> Result<Money, MoneyError> {
        self.amount.clone()
    }

    /// Calendar date in the timestamp's own offset
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    pub fn iso_week(&self) -> IsoWeek {
        self.time.iso_week()
    }

    pub fn key(&self) -> DepositKey {
        DepositKey::new(self.id.clone(), self.customer_id.clone())
    }
}
