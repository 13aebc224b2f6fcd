use crate::error::LedgerError;
use crate::startup::AppState;
use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use service_core::error::AppError;

pub const CPF_HEADER: &str = "cpf";

/// CPF of a registered customer, taken from the `cpf` header.
///
/// Extraction fails with `AccountNotFound` when the header is missing or no
/// customer is registered under it. Runs before body extraction, so an
/// unknown CPF is reported ahead of any body error.
#[derive(Debug, Clone)]
pub struct Cpf(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Cpf
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cpf = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(LedgerError::AccountNotFound)?;

        AppState::from_ref(state).ledger.ensure_account(cpf)?;

        Ok(Cpf(cpf.to_string()))
    }
}
