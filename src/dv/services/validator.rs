use crate::ids::{CustomerId, DepositKey};
use crate::ledgers::{DailyLedger, WeeklyLedger};
use crate::{Deposit, VelocityLimits};

use std::collections::{HashMap, HashSet};

pub trait Validator {
    /// Whether a deposit with the same ID has already been presented for this customer
    fn has_been_validated(&self, deposit: &Deposit) -> bool;

    /// Decides whether the deposit is accepted, recording it as processed either way.
    /// A deposit that was already processed is rejected without touching the ledgers.
    fn validate(&mut self, deposit: &Deposit) -> bool;
}

/// Tracks velocity ledgers per customer and every deposit key it has seen.
///
/// Ledgers follow the period of the latest deposit: a deposit on a new date (or ISO week) clears
/// the matching ledger before the limits are checked, even if that deposit is then rejected.
#[derive(Debug, Default)]
pub struct DepositValidator {
    limits: VelocityLimits,
    validated: HashSet<DepositKey>,
    daily_ledgers: HashMap<CustomerId, DailyLedger>,
    weekly_ledgers: HashMap<CustomerId, WeeklyLedger>,
}

impl DepositValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: VelocityLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn daily_ledger(&self, customer_id: &CustomerId) -> Option<&DailyLedger> {
        self.daily_ledgers.get(customer_id)
    }

    pub fn weekly_ledger(&self, customer_id: &CustomerId) -> Option<&WeeklyLedger> {
        self.weekly_ledgers.get(customer_id)
    }

    pub fn processed_count(&self) -> usize {
        self.validated.len()
    }

    fn find_daily_or_create(&mut self, customer_id: &CustomerId) -> &mut DailyLedger {
        self.daily_ledgers
            .entry(customer_id.clone())
            .or_insert_with(DailyLedger::new)
    }

    fn find_weekly_or_create(&mut self, customer_id: &CustomerId) -> &mut WeeklyLedger {
        self.weekly_ledgers
            .entry(customer_id.clone())
            .or_insert_with(WeeklyLedger::new)
    }
}

impl Validator for DepositValidator {
    fn has_been_validated(&self, deposit: &Deposit) -> bool {
        return self.validated.contains(&deposit.key());
    }

    fn validate(&mut self, deposit: &Deposit) -> bool {
        if !self.validated.insert(deposit.key()) {
            log::debug!("Deposit {} was already validated, not counting it again", deposit.key());
            return false;
        }

        let amount = match deposit.amount() {
            Ok(amount) => amount,
            Err(e) => {
                log::debug!("Rejecting deposit {}: {e}", deposit.key());
                return false;
            }
        };

        let limits = self.limits;
        let customer_id = deposit.customer_id();

        let daily = self.find_daily_or_create(customer_id);
        if daily.roll_to(deposit.date()) {
            log::debug!("Daily ledger for {customer_id} moved to {}", deposit.date());
        }
        let daily_ok = daily.permits(amount, &limits);

        let weekly = self.find_weekly_or_create(customer_id);
        if weekly.roll_to(deposit.iso_week()) {
            log::debug!("Weekly ledger for {customer_id} moved to {:?}", deposit.iso_week());
        }
        let weekly_ok = weekly.permits(amount, &limits);

        if !(daily_ok && weekly_ok) {
            log::debug!(
                "Deposit {} of {amount} exceeds limits (daily ok: {daily_ok}, weekly ok: {weekly_ok})",
                deposit.key()
            );
            return false;
        }

        self.find_daily_or_create(customer_id).record(amount);
        self.find_weekly_or_create(customer_id).record(amount);

        true
    }
}
