//! Request and response payloads of the HTTP API.

use crate::error::{LedgerError, AMOUNT_INVALID};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use validator::Validate;

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "cpf field is required."))]
    pub cpf: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name field is required."))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: Option<Value>,
}

impl DepositRequest {
    pub fn amount(&self) -> Result<Option<Decimal>, LedgerError> {
        parse_amount(self.amount.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Option<Value>,
}

impl WithdrawRequest {
    pub fn amount(&self) -> Result<Option<Decimal>, LedgerError> {
        parse_amount(self.amount.as_ref())
    }
}

/// Reads a JSON `amount`.
///
/// Absent, `null`, `false` and blank strings count as not given. Numbers and
/// numeric strings are parsed as decimals; anything else is invalid.
fn parse_amount(value: Option<&Value>) -> Result<Option<Decimal>, LedgerError> {
    let raw = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(LedgerError::Validation(AMOUNT_INVALID)),
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map(Some)
        .map_err(|_| LedgerError::Validation(AMOUNT_INVALID))
}

#[derive(Debug, Deserialize)]
pub struct StatementDateParams {
    pub date: Option<String>,
}
