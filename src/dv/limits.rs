use crate::Money;

pub const MAX_DAILY_DEPOSITS: u32 = 3;
pub const DAILY_LIMIT: Money = Money(5000.0);
pub const WEEKLY_LIMIT: Money = Money(20000.0);

/// Velocity limits applied to every customer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityLimits {
    pub max_daily_deposits: u32,
    pub daily_limit: Money,
    pub weekly_limit: Money,
}

impl Default for VelocityLimits {
    fn default() -> Self {
        Self {
            max_daily_deposits: MAX_DAILY_DEPOSITS,
            daily_limit: DAILY_LIMIT,
            weekly_limit: WEEKLY_LIMIT,
        }
    }
}
