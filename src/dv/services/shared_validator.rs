use super::{DepositValidator, Validator};

use crate::Deposit;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe handle over a single DepositValidator.
///
/// Every call holds one lock for its whole duration, so a check-then-validate through
/// `validate_new` cannot interleave with another caller's update of the same ledgers.
#[derive(Debug, Default)]
pub struct SharedValidator {
    inner: Mutex<DepositValidator>,
}

impl SharedValidator {
    pub fn new(validator: DepositValidator) -> Self {
        Self {
            inner: Mutex::new(validator),
        }
    }

    pub fn has_been_validated(&self, deposit: &Deposit) -> bool {
        self.lock().has_been_validated(deposit)
    }

    pub fn validate(&self, deposit: &Deposit) -> bool {
        self.lock().validate(deposit)
    }

    /// Validates the deposit unless it was already processed, in which case `None` is returned
    pub fn validate_new(&self, deposit: &Deposit) -> Option<bool> {
        let mut validator = self.lock();

        if validator.has_been_validated(deposit) {
            return None;
        }

        Some(validator.validate(deposit))
    }

    pub fn into_inner(self) -> DepositValidator {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Ledgers are only written after every check has passed, so a poisoned guard is still consistent
    fn lock(&self) -> MutexGuard<'_, DepositValidator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::{CustomerId, DepositId};
    use crate::Money;

    use super::*;

    use std::thread;

    use chrono::DateTime;

    fn build_deposit(id: &str, customer_id: &str, amount: &str, time: &str) -> Deposit {
        Deposit::new(
            DepositId::from(id),
            CustomerId::from(customer_id),
            amount,
            DateTime::parse_from_rfc3339(time).unwrap(),
        )
    }

    #[test]
    fn validate_new() {
        let validator = SharedValidator::default();
        let deposit = build_deposit("1", "1", "$1.00", "2021-01-09T10:00:00Z");

        assert!(!validator.has_been_validated(&deposit));
        assert_eq!(validator.validate_new(&deposit), Some(true));
        assert!(validator.has_been_validated(&deposit));
        assert_eq!(validator.validate_new(&deposit), None);
    }

    #[test]
    fn validate_repeated_deposit_counts_once() {
        let validator = SharedValidator::default();
        let deposit = build_deposit("1", "1", "$100.00", "2021-01-09T10:00:00Z");

        assert!(validator.validate(&deposit));
        assert!(!validator.validate(&deposit));

        let validator = validator.into_inner();
        let daily = validator.daily_ledger(&CustomerId::from("1")).unwrap();
        assert_eq!(daily.deposits(), 1);
        assert_eq!(daily.total(), Money(100.0));
    }

    #[test]
    fn validate_concurrently() {
        let validator = SharedValidator::default();

        thread::scope(|scope| {
            for customer in 0..4 {
                let validator = &validator;

                scope.spawn(move || {
                    for id in 0..10 {
                        let deposit = build_deposit(
                            &id.to_string(),
                            &customer.to_string(),
                            "$100.00",
                            "2021-01-09T10:00:00Z",
                        );
                        validator.validate(&deposit);
                    }
                });
            }
        });

        let validator = validator.into_inner();
        assert_eq!(validator.processed_count(), 40);

        for customer in 0..4 {
            let daily = validator
                .daily_ledger(&CustomerId::from(customer.to_string().as_str()))
                .unwrap();

            assert_eq!(daily.deposits(), 3);
            assert_eq!(daily.total(), Money(300.0));
        }
    }

    #[test]
    fn duplicate_is_validated_once_across_threads() {
        let validator = SharedValidator::default();
        let deposit = build_deposit("1", "1", "$1.00", "2021-01-09T10:00:00Z");

        let verdicts: Vec<Option<bool>> = thread::scope(|scope| {
            let shared = &validator;
            let deposit = &deposit;

            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || shared.validate_new(deposit)))
                .collect();

            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(verdicts.iter().filter(|verdict| verdict.is_some()).count(), 1);
        assert_eq!(
            validator
                .into_inner()
                .daily_ledger(&CustomerId::from("1"))
                .unwrap()
                .deposits(),
            1
        );
    }
}
