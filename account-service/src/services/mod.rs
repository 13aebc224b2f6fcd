pub mod ledger;
pub mod metrics;

pub use ledger::Ledger;
pub use metrics::{get_metrics, init_metrics};
