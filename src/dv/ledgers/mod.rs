mod daily_ledger;
mod weekly_ledger;

pub use daily_ledger::DailyLedger;
pub use weekly_ledger::WeeklyLedger;
