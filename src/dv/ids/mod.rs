mod customer_id;
mod deposit_id;

pub use customer_id::CustomerId;
pub use deposit_id::DepositId;

use std::fmt;

/// Duplicate-detection key: a deposit ID is only unique per customer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepositKey {
    pub id: DepositId,
    pub customer_id: CustomerId,
}

impl DepositKey {
    pub fn new(id: DepositId, customer_id: CustomerId) -> Self {
        Self { id, customer_id }
    }
}

impl fmt::Display for DepositKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}-{}", self.id, self.customer_id.0);
    }
}
