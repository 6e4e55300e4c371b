use crate::ids::{CustomerId, DepositId};

use serde::{Deserialize, Serialize};

/// Verdict written back for each processed deposit, one JSON object per line
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DepositResponse {
    pub id: DepositId,
    pub customer_id: CustomerId,
    pub accepted: bool,
}

impl DepositResponse {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
