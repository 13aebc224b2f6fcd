//! Statement operation model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation kind, carrying the fields that only exist for that kind.
///
/// Serialized as the `type` tag of the enclosing [`Operation`]; credits always
/// carry a `description` key (null when none was given), debits never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationKind {
    Credit { description: Option<String> },
    Debit,
}

impl OperationKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit { .. } => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single statement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(flatten)]
    pub kind: OperationKind,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Credit stamped with the current time.
    pub fn credit(amount: Decimal, description: Option<String>) -> Self {
        Self {
            kind: OperationKind::Credit { description },
            amount,
            created_at: Utc::now(),
        }
    }

    /// Debit stamped with the current time.
    pub fn debit(amount: Decimal) -> Self {
        Self {
            kind: OperationKind::Debit,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Get signed amount (positive for credit, negative for debit).
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationKind::Credit { .. } => self.amount,
            OperationKind::Debit => -self.amount,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.kind {
            OperationKind::Credit { description } => description.as_deref(),
            OperationKind::Debit => None,
        }
    }
}
