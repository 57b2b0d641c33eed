//! Pure text renderers for the dashboard shell.
//!
//! Everything here returns a `String` and touches no terminal state, so
//! the layouts are testable without a tty.

use crate::chart::{ChartBar, ChartSlice};
use crate::currency::Currency;
use crate::dashboard::{DashboardMetrics, DashboardState, Transaction};

const BAR_WIDTH: usize = 40;

/// The three metric cards: income, expenses, balance.
pub fn metric_cards(metrics: &DashboardMetrics, currency: &Currency) -> String {
    format!(
        "Income:   {}\nExpenses: {}\nBalance:  {}",
        currency.format(metrics.income),
        currency.format(metrics.expenses),
        currency.format(metrics.balance),
    )
}

/// The income header line, marking edit mode the way the original view
/// swaps its label for an input field.
pub fn income_line(state: &DashboardState) -> String {
    let amount = state.selected_currency().format(state.income());
    if state.income_edit_mode() {
        format!("Monthly Income: {amount} [editing]")
    } else {
        format!("Monthly Income: {amount}")
    }
}

/// Transaction list in insertion order: date, category, amount,
/// description.
pub fn transaction_table(transactions: &[Transaction], currency: &Currency) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }
    let mut out = format!(
        "{:<12} {:<16} {:>12}  {}\n",
        "Date", "Category", "Amount", "Description"
    );
    for transaction in transactions {
        out.push_str(&format!(
            "{:<12} {:<16} {:>12}  {}\n",
            transaction.date,
            transaction.category,
            currency.format(transaction.amount),
            transaction.description,
        ));
    }
    out.pop();
    out
}

/// Expense breakdown as one line per slice: label, proportional bar in
/// the slice's palette position, whole-number percent, amount.
pub fn pie_chart(slices: &[ChartSlice], currency: &Currency) -> String {
    if slices.is_empty() {
        return "No expenses to break down.".to_string();
    }
    let label_width = slices
        .iter()
        .map(|slice| slice.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for slice in slices {
        let filled = ((slice.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$} {:<BAR_WIDTH$} {:>3.0}%  {}  [{}]\n",
            slice.label,
            "█".repeat(filled),
            slice.percent,
            currency.format(slice.value),
            slice.color,
        ));
    }
    out.pop();
    out
}

/// Monthly totals as horizontal bars scaled to the largest month.
pub fn bar_chart(bars: &[ChartBar]) -> String {
    if bars.is_empty() {
        return "No monthly expenses yet.".to_string();
    }
    let max = bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);
    let mut out = String::new();
    for bar in bars {
        let filled = if max > 0.0 {
            ((bar.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<8} {:<BAR_WIDTH$} {}\n",
            bar.month,
            "█".repeat(filled),
            bar.tooltip,
        ));
    }
    out.pop();
    out
}
