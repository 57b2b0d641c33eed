use serde::Serialize;

/// Headline numbers for the dashboard's metric cards, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Income minus expenses. Never clamped; a balance below zero means the
/// user overspent.
pub fn compute_balance(income: f64, expense_total: f64) -> f64 {
    income - expense_total
}
