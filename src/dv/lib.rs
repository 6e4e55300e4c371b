mod deposit;
mod deposit_response;
pub mod ids;
pub mod input;
pub mod ledgers;
mod limits;
mod money;
pub mod processor;
mod result;
pub mod services;

pub use deposit::Deposit;
pub use deposit_response::DepositResponse;
pub use limits::{VelocityLimits, DAILY_LIMIT, MAX_DAILY_DEPOSITS, WEEKLY_LIMIT};
pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_validator() -> services::DepositValidator {
    let validator = services::DepositValidator::with_limits(VelocityLimits::default());

    return validator;
}
