use crate::domain::admission::RejectReason;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayoutError>;

/// Failures originating from the external payment provider.
///
/// The admission logic never generates or catches these; they propagate
/// to the caller untouched.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("invalid recipient data: {0}")]
    InvalidRecipient(String),
    #[error("invalid banking details: {0}")]
    InvalidBankDetails(String),
    #[error("unknown destination account: {0}")]
    UnknownDestination(String),
    #[error("insufficient platform funds")]
    InsufficientFunds,
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum PayoutError {
    /// Expected, recoverable outcome of the admission check. Not a fault.
    #[error("payout rejected: {0}")]
    Rejected(RejectReason),
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("validation error: {0}")]
    ValidationError(String),
}
