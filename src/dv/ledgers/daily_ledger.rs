use crate::{Money, VelocityLimits};

use chrono::NaiveDate;

/// Deposits accepted for one customer on the calendar date currently tracked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLedger {
    date: Option<NaiveDate>,
    deposits: u32,
    total: Money,
}

impl DailyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the ledger when `date` is not the tracked date. Returns whether it was reset.
    pub fn roll_to(&mut self, date: NaiveDate) -> bool {
        if self.date == Some(date) {
            return false;
        }

        self.date = Some(date);
        self.deposits = 0;
        self.total = Money::ZERO;

        true
    }

    pub fn permits(&self, amount: Money, limits: &VelocityLimits) -> bool {
        let mut total = self.total;
        total.add(&amount);

        self.deposits < limits.max_daily_deposits && total <= limits.daily_limit
    }

    pub fn record(&mut self, amount: Money) {
        self.deposits += 1;
        self.total.add(&amount);
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn deposits(&self) -> u32 {
        self.deposits
    }

    pub fn total(&self) -> Money {
        self.total
    }
}
