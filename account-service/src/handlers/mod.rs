pub mod account;
pub mod health;
pub mod statement;
pub mod transactions;

pub use account::{create_account, delete_account, get_account, update_account};
pub use health::{health_check, metrics_endpoint, route_not_found};
pub use statement::{get_statement, get_statement_by_date};
pub use transactions::{deposit, get_balance, withdraw};
