//! Pure reductions over a transaction sequence.
//!
//! All three aggregations fold in input order starting from zero, so
//! floating-point rounding is a function of the sequence alone. Output
//! entries appear in the order their key was first encountered; nothing
//! is sorted.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::transaction::Transaction;

/// Month label used when a transaction's date does not parse.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Total spent in one calendar month. Years deliberately collapse into a
/// single label: January 2023 and January 2024 both land on `"Jan"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: String,
    pub total: f64,
}

/// Injected short-month-name table so labeling never depends on the host
/// locale.
#[derive(Debug, Clone)]
pub struct MonthNames(pub [&'static str; 12]);

impl Default for MonthNames {
    fn default() -> Self {
        Self([
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ])
    }
}

impl MonthNames {
    /// Label for a transaction's date, or [`UNKNOWN_MONTH`] when the date
    /// is not a valid `YYYY-MM-DD` string.
    pub fn label_for(&self, date: &str) -> &'static str {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => self.0[parsed.month0() as usize],
            Err(err) => {
                tracing::warn!(date, %err, "unparsable transaction date");
                UNKNOWN_MONTH
            }
        }
    }
}

/// Groups transactions by exact category text, accumulating in input
/// order. Empty input yields an empty output.
pub fn aggregate_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions {
        match totals
            .iter_mut()
            .find(|entry| entry.category == transaction.category)
        {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                total: transaction.amount,
            }),
        }
    }
    totals
}

/// Groups transactions by short month label derived from their date.
pub fn aggregate_by_month(transactions: &[Transaction], months: &MonthNames) -> Vec<MonthTotal> {
    let mut totals: Vec<MonthTotal> = Vec::new();
    for transaction in transactions {
        let label = months.label_for(&transaction.date);
        match totals.iter_mut().find(|entry| entry.month == label) {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(MonthTotal {
                month: label.to_string(),
                total: transaction.amount,
            }),
        }
    }
    totals
}

/// Grand total of all transaction amounts, folded in input order.
pub fn sum(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |acc, transaction| acc + transaction.amount)
}
