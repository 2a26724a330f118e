use rust_decimal::Decimal;
use thiserror::Error;

/// **An application-specific error type**
///
/// All variants are request-level validation failures: they surface to the
/// caller with a 400-class status and are never fatal to the process.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Customer not found: \"{0}\"")]
    CustomerNotFound(String),

    #[error("Customer already exists: \"{0}\"")]
    AlreadyExists(String),

    #[error("Insufficient funds on account \"{tax_id}\": requested {requested}")]
    InsufficientFunds { tax_id: String, requested: Decimal },

    #[error("Invalid date: \"{0}\"; expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub const EMPTY_TAX_ID_MSG: &str = "Tax id cannot be empty.";
pub const EMPTY_NAME_MSG: &str = "Name cannot be empty.";
