//! In-memory account ledger.
//!
//! Customers are keyed by CPF in a [`DashMap`]. Every mutating operation runs
//! while holding the entry guard of the customer it touches, which makes the
//! duplicate check on creation and the balance check on withdrawal atomic with
//! respect to concurrent requests for the same CPF.

use crate::error::{LedgerError, AMOUNT_NEGATIVE, AMOUNT_REQUIRED, BALANCE_OVERFLOW};
use crate::models::{Customer, Operation};
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

/// Process-wide store of customers and their statements.
#[derive(Debug, Default)]
pub struct Ledger {
    customers: DashMap<String, Customer>,
}

/// Absent and zero amounts are both "missing".
fn required_amount(amount: Option<Decimal>) -> Result<Decimal, LedgerError> {
    match amount {
        None => Err(LedgerError::Validation(AMOUNT_REQUIRED)),
        Some(a) if a.is_zero() => Err(LedgerError::Validation(AMOUNT_REQUIRED)),
        Some(a) if a.is_sign_negative() => Err(LedgerError::Validation(AMOUNT_NEGATIVE)),
        Some(a) => Ok(a),
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customers currently held.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    // -------------------------------------------------------------------------
    // Account Operations
    // -------------------------------------------------------------------------

    /// Create a customer with an empty statement.
    #[instrument(skip_all)]
    pub fn create_account(
        &self,
        cpf: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Customer, LedgerError> {
        let cpf = cpf.into();

        match self.customers.entry(cpf.clone()) {
            Entry::Occupied(_) => {
                warn!("Account creation rejected: CPF already registered");
                Err(LedgerError::DuplicateAccount)
            }
            Entry::Vacant(slot) => {
                let customer = Customer::new(cpf, name);
                slot.insert(customer.clone());
                info!(customer_id = %customer.id, "Account created");
                Ok(customer)
            }
        }
    }

    /// Snapshot of the customer registered under `cpf`.
    pub fn find_account(&self, cpf: &str) -> Result<Customer, LedgerError> {
        self.customers
            .get(cpf)
            .map(|customer| customer.value().clone())
            .ok_or(LedgerError::AccountNotFound)
    }

    /// Fails with `AccountNotFound` unless a customer is registered under `cpf`.
    pub fn ensure_account(&self, cpf: &str) -> Result<(), LedgerError> {
        if self.customers.contains_key(cpf) {
            Ok(())
        } else {
            Err(LedgerError::AccountNotFound)
        }
    }

    /// Overwrite the customer's name.
    #[instrument(skip_all)]
    pub fn update_account(
        &self,
        cpf: &str,
        name: impl Into<String>,
    ) -> Result<Customer, LedgerError> {
        let mut customer = self
            .customers
            .get_mut(cpf)
            .ok_or(LedgerError::AccountNotFound)?;

        customer.name = name.into();
        info!(customer_id = %customer.id, "Account updated");

        Ok(customer.clone())
    }

    /// Remove the customer and return the removed record.
    #[instrument(skip_all)]
    pub fn delete_account(&self, cpf: &str) -> Result<Customer, LedgerError> {
        let (_, customer) = self
            .customers
            .remove(cpf)
            .ok_or(LedgerError::AccountNotFound)?;

        info!(
            customer_id = %customer.id,
            operations = customer.statement.len(),
            "Account deleted"
        );

        Ok(customer)
    }

    // -------------------------------------------------------------------------
    // Statement Operations
    // -------------------------------------------------------------------------

    pub fn get_statement(&self, cpf: &str) -> Result<Vec<Operation>, LedgerError> {
        self.customers
            .get(cpf)
            .map(|customer| customer.statement.clone())
            .ok_or(LedgerError::AccountNotFound)
    }

    pub fn get_statement_by_date(
        &self,
        cpf: &str,
        date: NaiveDate,
    ) -> Result<Vec<Operation>, LedgerError> {
        self.customers
            .get(cpf)
            .map(|customer| customer.statement_on(date))
            .ok_or(LedgerError::AccountNotFound)
    }

    pub fn get_balance(&self, cpf: &str) -> Result<Decimal, LedgerError> {
        self.customers
            .get(cpf)
            .map(|customer| customer.balance())
            .ok_or(LedgerError::AccountNotFound)
    }

    /// Append a credit.
    #[instrument(skip_all)]
    pub fn deposit(
        &self,
        cpf: &str,
        amount: Option<Decimal>,
        description: Option<String>,
    ) -> Result<Operation, LedgerError> {
        let mut customer = self
            .customers
            .get_mut(cpf)
            .ok_or(LedgerError::AccountNotFound)?;
        let amount = required_amount(amount)?;

        // Keeps every prefix of the statement representable, so the balance
        // fold can never overflow.
        if customer.balance().checked_add(amount).is_none() {
            warn!(
                customer_id = %customer.id,
                amount = %amount,
                "Deposit rejected: balance would overflow"
            );
            return Err(LedgerError::Validation(BALANCE_OVERFLOW));
        }

        let operation = Operation::credit(amount, description);
        customer.statement.push(operation.clone());

        info!(
            customer_id = %customer.id,
            kind = %operation.kind,
            amount = %amount,
            "Operation recorded"
        );

        Ok(operation)
    }

    /// Append a debit if the balance covers it. Withdrawing the exact balance
    /// is allowed.
    #[instrument(skip_all)]
    pub fn withdraw(&self, cpf: &str, amount: Option<Decimal>) -> Result<Operation, LedgerError> {
        let mut customer = self
            .customers
            .get_mut(cpf)
            .ok_or(LedgerError::AccountNotFound)?;
        let amount = required_amount(amount)?;

        let balance = customer.balance();
        if balance < amount {
            warn!(
                customer_id = %customer.id,
                balance = %balance,
                amount = %amount,
                "Withdrawal rejected: insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let operation = Operation::debit(amount);
        customer.statement.push(operation.clone());

        info!(
            customer_id = %customer.id,
            kind = %operation.kind,
            amount = %amount,
            "Operation recorded"
        );

        Ok(operation)
    }
}
