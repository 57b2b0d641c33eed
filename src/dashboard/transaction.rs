use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded expense, in base currency units. Immutable once created;
/// the aggregator never mutates a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Calendar date as entered (`YYYY-MM-DD` expected). Kept as raw text
    /// and parsed only when a month label is derived, so a malformed
    /// entry degrades to the `"Unknown"` month group instead of failing.
    pub date: String,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}
