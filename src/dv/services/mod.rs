mod shared_validator;
mod validator;

pub use shared_validator::SharedValidator;
pub use validator::{DepositValidator, Validator};
