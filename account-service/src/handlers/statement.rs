use crate::dtos::{DataResponse, StatementDateParams};
use crate::middleware::Cpf;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use service_core::error::AppError;

const INVALID_DATE: &str = "date query parameter must be a valid YYYY-MM-DD date.";

fn parse_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    raw.map(str::trim)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!(INVALID_DATE)))
}

pub async fn get_statement(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> Result<impl IntoResponse, AppError> {
    let statement = state.ledger.get_statement(&cpf)?;
    Ok(Json(DataResponse::new(statement)))
}

pub async fn get_statement_by_date(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    Query(params): Query<StatementDateParams>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(params.date.as_deref())?;

    let statement = state.ledger.get_statement_by_date(&cpf, date)?;
    Ok(Json(DataResponse::new(statement)))
}
