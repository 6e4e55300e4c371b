use crate::{Money, VelocityLimits};

use chrono::IsoWeek;

/// Value accepted for one customer during the ISO week currently tracked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyLedger {
    week: Option<IsoWeek>,
    total: Money,
}

impl WeeklyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the ledger when `week` is not the tracked week. Returns whether it was reset.
    pub fn roll_to(&mut self, week: IsoWeek) -> bool {
        if self.week == Some(week) {
            return false;
        }

        self.week = Some(week);
        self.total = Money::ZERO;

        true
    }

    pub fn permits(&self, amount: Money, limits: &VelocityLimits) -> bool {
        let mut total = self.total;
        total.add(&amount);

        total <= limits.weekly_limit
    }

    pub fn record(&mut self, amount: Money) {
        self.total.add(&amount);
    }

    pub fn week(&self) -> Option<IsoWeek> {
        self.week
    }

    pub fn total(&self) -> Money {
        self.total
    }
}
