use expense_core::chart::{expense_breakdown, monthly_totals};
use expense_core::cli::view;
use expense_core::dashboard::{DashboardState, MonthNames, Transaction};
use regex::Regex;

fn populated_state() -> DashboardState {
    let mut state = DashboardState::new();
    state.set_income(1000.0);
    state.add_transaction(Transaction::new(50.0, "Food", "groceries", "2024-01-05"));
    state.add_transaction(Transaction::new(30.0, "Food", "restaurant", "2024-02-10"));
    state.add_transaction(Transaction::new(20.0, "Transport", "bus pass", "2024-01-15"));
    state
}

#[test]
fn metric_cards_render_income_expenses_and_balance() {
    let state = populated_state();
    let cards = view::metric_cards(&state.metrics(), state.selected_currency());
    assert!(cards.contains("Income:   $1000.00"));
    assert!(cards.contains("Expenses: $100.00"));
    assert!(cards.contains("Balance:  $900.00"));
}

#[test]
fn transaction_rows_carry_date_category_and_amount() {
    let state = populated_state();
    let table = view::transaction_table(state.transactions(), state.selected_currency());
    let row = Regex::new(r"(?m)^\d{4}-\d{2}-\d{2}\s+\S+\s+\$\d+\.\d{2}\s").unwrap();
    assert_eq!(row.find_iter(&table).count(), 3);
}

#[test]
fn pie_lines_end_with_amount_and_palette_color() {
    let state = populated_state();
    let slices = expense_breakdown(state.transactions());
    let rendered = view::pie_chart(&slices, state.selected_currency());
    let line = Regex::new(r"(?m)^\S+\s+█*\s+\d+%\s+\$\d+\.\d{2}\s+\[#[0-9A-Fa-f]{6}\]$").unwrap();
    assert_eq!(line.find_iter(&rendered).count(), 2);
}

#[test]
fn bar_chart_lines_start_with_month_labels() {
    let state = populated_state();
    let bars = monthly_totals(
        state.transactions(),
        &MonthNames::default(),
        state.selected_currency(),
    );
    let rendered = view::bar_chart(&bars);
    let mut lines = rendered.lines();
    assert!(lines.next().unwrap().starts_with("Jan"));
    assert!(lines.next().unwrap().starts_with("Feb"));
    assert!(lines.next().is_none());
}

#[test]
fn currency_switch_changes_rendered_symbols_only() {
    let mut state = populated_state();
    state.set_currency("GBP");
    let cards = view::metric_cards(&state.metrics(), state.selected_currency());
    assert!(cards.contains("£790.00"));
    assert!(cards.contains("£79.00"));
    assert!(cards.contains("£711.00"));
}
