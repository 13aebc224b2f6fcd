//! Customer account model.

use super::Operation;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer account with its statement.
///
/// `id` and `cpf` never change after creation; `statement` is append-only and
/// kept in insertion (chronological) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub statement: Vec<Operation>,
}

impl Customer {
    /// New customer with a random v4 id and an empty statement.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cpf: cpf.into(),
            statement: Vec::new(),
        }
    }

    /// Credits minus debits, folded in statement order.
    pub fn balance(&self) -> Decimal {
        self.statement
            .iter()
            .fold(Decimal::ZERO, |acc, op| acc + op.signed_amount())
    }

    /// Operations created on `date` (UTC calendar day), in statement order.
    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        self.statement
            .iter()
            .filter(|op| op.created_at.date_naive() == date)
            .cloned()
            .collect()
    }
}
