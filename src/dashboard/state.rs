use uuid::Uuid;

use crate::currency::{self, Currency};

use super::aggregate::sum;
use super::metrics::{compute_balance, DashboardMetrics};
use super::transaction::Transaction;

/// Per-view dashboard state. Each dashboard view constructs its own
/// instance on entry and drops it on exit; nothing is shared across views
/// or sessions, and nothing is persisted.
#[derive(Debug, Clone)]
pub struct DashboardState {
    income: f64,
    transactions: Vec<Transaction>,
    selected_currency: &'static Currency,
    income_edit_mode: bool,
}

impl DashboardState {
    /// Fresh state: zero income, no transactions, first table currency,
    /// income shown as a static label.
    pub fn new() -> Self {
        Self {
            income: 0.0,
            transactions: Vec::new(),
            selected_currency: currency::default_currency(),
            income_edit_mode: false,
        }
    }

    /// Appends a transaction and returns its id. The sequence only ever
    /// grows; display order is insertion order.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        tracing::debug!(%id, amount = transaction.amount, category = %transaction.category, "transaction added");
        self.transactions.push(transaction);
        id
    }

    /// Replaces the income figure. Unvalidated; the input widget may
    /// restrict what can be typed, the core does not.
    pub fn set_income(&mut self, income: f64) {
        tracing::debug!(income, "income updated");
        self.income = income;
    }

    /// Flips between the editable income input and the static label.
    pub fn toggle_income_edit(&mut self) {
        self.income_edit_mode = !self.income_edit_mode;
    }

    /// Switches the display currency by code. An unknown code leaves the
    /// selection unchanged; the caller is never handed an error.
    pub fn set_currency(&mut self, code: &str) {
        match currency::find_by_code(code) {
            Some(found) => self.selected_currency = found,
            None => tracing::warn!(code, "unknown currency code, selection unchanged"),
        }
    }

    /// Snapshot of income, total expenses, and balance, recomputed from
    /// the full transaction sequence on every call.
    pub fn metrics(&self) -> DashboardMetrics {
        let expenses = sum(&self.transactions);
        DashboardMetrics {
            income: self.income,
            expenses,
            balance: compute_balance(self.income, expenses),
        }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn selected_currency(&self) -> &'static Currency {
        self.selected_currency
    }

    pub fn income_edit_mode(&self) -> bool {
        self.income_edit_mode
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_view_entry_defaults() {
        let state = DashboardState::new();
        assert!(state.income().abs() < f64::EPSILON);
        assert!(state.transactions().is_empty());
        assert_eq!(state.selected_currency().code, "USD");
        assert!(!state.income_edit_mode());
    }

    #[test]
    fn unknown_currency_is_a_silent_no_op() {
        let mut state = DashboardState::new();
        state.set_currency("INR");
        state.set_currency("XYZ");
        assert_eq!(state.selected_currency().code, "INR");
    }

    #[test]
    fn metrics_recompute_from_the_sequence() {
        let mut state = DashboardState::new();
        state.set_income(1000.0);
        state.add_transaction(Transaction::new(50.0, "Food", "", "2024-01-05"));
        state.add_transaction(Transaction::new(30.0, "Food", "", "2024-02-10"));
        state.add_transaction(Transaction::new(20.0, "Transport", "", "2024-01-15"));
        let metrics = state.metrics();
        assert!((metrics.expenses - 100.0).abs() < f64::EPSILON);
        assert!((metrics.balance - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_income_is_accepted() {
        let mut state = DashboardState::new();
        state.set_income(-42.0);
        assert!((state.income() + 42.0).abs() < f64::EPSILON);
    }
}
