use crate::dtos::{DataResponse, DepositRequest, WithdrawRequest};
use crate::middleware::{ApiJson, Cpf};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

/// Records a credit. Responds 201 with an empty body.
pub async fn deposit(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    ApiJson(req): ApiJson<DepositRequest>,
) -> Result<StatusCode, AppError> {
    let amount = req.amount()?;
    state.ledger.deposit(&cpf, amount, req.description)?;
    Ok(StatusCode::CREATED)
}

/// Records a debit. Responds 201 with an empty body.
pub async fn withdraw(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    ApiJson(req): ApiJson<WithdrawRequest>,
) -> Result<StatusCode, AppError> {
    let amount = req.amount()?;
    state.ledger.withdraw(&cpf, amount)?;
    Ok(StatusCode::CREATED)
}

pub async fn get_balance(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> Result<impl IntoResponse, AppError> {
    let balance = state.ledger.get_balance(&cpf)?;
    Ok(Json(DataResponse::new(balance)))
}
