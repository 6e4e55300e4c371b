use crate::ids::{CustomerId, DepositId};
use crate::input::InputDeposit;
use crate::services::Validator;
use crate::{DepositResponse, Result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Deposit {0} has already been processed for {1}")]
    DuplicateSubmission(DepositId, CustomerId),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

/// Parses one input line and validates it, unless it has been processed before
pub fn process_line<V: Validator>(validator: &mut V, line: &str) -> Result<DepositResponse> {
    let input = InputDeposit::parse(line)
        .map_err(|e| ProcessError::MalformedRecord(format!("{e}: {line}")))?;

    log::debug!("Parsing input into Deposit: {input:?}");
    let deposit = input.into_deposit();

    if validator.has_been_validated(&deposit) {
        Err(ProcessError::DuplicateSubmission(
            deposit.id().clone(),
            deposit.customer_id().clone(),
        ))?
    }

    let accepted = validator.validate(&deposit);
    log::debug!("Deposit {} accepted: {accepted}", deposit.key());

    return Ok(DepositResponse {
        id: deposit.id().clone(),
        customer_id: deposit.customer_id().clone(),
        accepted,
    });
}

/// Running totals for one pass over an input stream
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub duplicates: usize,
    pub malformed: usize,
}

impl ProcessSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &Result<DepositResponse>) {
        match result {
            Ok(response) if response.accepted => self.accepted += 1,
            Ok(_) => self.rejected += 1,
            Err(e) => match e.downcast_ref::<ProcessError>() {
                Some(ProcessError::DuplicateSubmission(_, _)) => self.duplicates += 1,
                _ => self.malformed += 1,
            },
        }
    }

    pub fn record_malformed(&mut self) {
        self.malformed += 1;
    }
}
