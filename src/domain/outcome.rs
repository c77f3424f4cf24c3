use serde::{Deserialize, Serialize};

/// Terminal signal of one authorization attempt.
///
/// The external flow collapses all of its internal states into this binary
/// signal before it reaches this layer; no partial states are modeled.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOutcome {
    Completed,
    NotCompleted,
}

impl TransactionOutcome {
    pub fn is_completed(&self) -> bool {
        *self == TransactionOutcome::Completed
    }
}
