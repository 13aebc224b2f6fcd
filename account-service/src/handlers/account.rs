use crate::dtos::{CreateAccountRequest, DataResponse, UpdateAccountRequest};
use crate::middleware::{ApiJson, Cpf};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let customer = state.ledger.create_account(req.cpf, req.name)?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}

pub async fn get_account(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.ledger.find_account(&cpf)?;
    Ok(Json(DataResponse::new(customer)))
}

pub async fn update_account(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    ApiJson(req): ApiJson<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.ledger.update_account(&cpf, req.name)?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.ledger.delete_account(&cpf)?;
    Ok(Json(DataResponse::new(removed)))
}
