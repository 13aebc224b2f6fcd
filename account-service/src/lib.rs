//! Account Service - customer accounts with credit/debit statements, held in memory.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

pub use error::LedgerError;
pub use services::Ledger;
pub use startup::{AppState, Application};
