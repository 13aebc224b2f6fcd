//! Domain models for account-service.

mod customer;
mod operation;

pub use customer::Customer;
pub use operation::{Operation, OperationKind};
