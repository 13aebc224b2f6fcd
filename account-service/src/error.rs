use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;

pub const AMOUNT_REQUIRED: &str = "amount field is required.";
pub const AMOUNT_NEGATIVE: &str = "amount must not be negative.";
pub const AMOUNT_INVALID: &str = "amount must be a valid number.";
pub const BALANCE_OVERFLOW: &str = "amount exceeds the maximum balance.";

/// Failures of ledger operations.
///
/// The display strings are the messages returned to HTTP callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Customer already exists!")]
    DuplicateAccount,

    #[error("Customer not found...")]
    AccountNotFound,

    #[error("{0}")]
    Validation(&'static str),

    #[error("Insufficient funds!")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
}

impl LedgerError {
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::DuplicateAccount => "duplicate_account",
            LedgerError::AccountNotFound => "account_not_found",
            LedgerError::Validation(_) => "validation_error",
            LedgerError::InsufficientFunds { .. } => "insufficient_funds",
        }
    }
}

// All ledger failures surface as 400, not-found included.
impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        tracing::debug!(error_kind = err.kind(), "Ledger operation rejected");
        AppError::BadRequest(anyhow::Error::new(err))
    }
}
