//! Interactive dashboard shell.
//!
//! One [`DashboardState`] is created when the shell starts and dropped
//! when the user logs out; nothing survives the session.

pub mod output;
pub mod view;

use std::io::{self, Write};

use crossterm::{cursor, terminal, ExecutableCommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde_json::json;

use crate::chart::{expense_breakdown, monthly_totals};
use crate::currency::CURRENCIES;
use crate::dashboard::{DashboardState, MonthNames, Transaction};
use crate::errors::DashboardError;
use output::Formatter;

const MENU: [&str; 8] = [
    "Add transaction",
    "Edit income",
    "Change currency",
    "List transactions",
    "Expense breakdown",
    "Monthly expenses",
    "Export snapshot",
    "Logout",
];

/// Runs the dashboard loop until the user logs out.
pub fn run_cli() -> Result<(), DashboardError> {
    let mut state = DashboardState::new();
    let months = MonthNames::default();
    let formatter = Formatter::new();

    loop {
        clear_screen()?;
        formatter.print_header("Expense Tracker");
        formatter.print_info(view::income_line(&state));
        formatter.print_info(view::metric_cards(
            &state.metrics(),
            state.selected_currency(),
        ));
        println!();

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Dashboard")
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_transaction(&mut state, &formatter)?,
            1 => edit_income(&mut state, &formatter)?,
            2 => change_currency(&mut state, &formatter)?,
            3 => {
                formatter.print_info(view::transaction_table(
                    state.transactions(),
                    state.selected_currency(),
                ));
                pause()?;
            }
            4 => {
                let slices = expense_breakdown(state.transactions());
                formatter.print_info(view::pie_chart(&slices, state.selected_currency()));
                pause()?;
            }
            5 => {
                let bars = monthly_totals(state.transactions(), &months, state.selected_currency());
                formatter.print_info(view::bar_chart(&bars));
                pause()?;
            }
            6 => {
                export_snapshot(&state, &months)?;
                pause()?;
            }
            _ => {
                tracing::info!("logout requested, dropping dashboard state");
                break;
            }
        }
    }

    Ok(())
}

fn add_transaction(state: &mut DashboardState, formatter: &Formatter) -> Result<(), DashboardError> {
    let theme = ColorfulTheme::default();
    let amount: f64 = Input::with_theme(&theme)
        .with_prompt("Amount (base units)")
        .interact_text()?;
    let category: String = Input::with_theme(&theme)
        .with_prompt("Category")
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()?;

    let display = state.selected_currency().format(amount);
    state.add_transaction(Transaction::new(amount, category, description, date));
    formatter.print_success(format!("Recorded {display}."));
    pause()
}

fn edit_income(state: &mut DashboardState, formatter: &Formatter) -> Result<(), DashboardError> {
    state.toggle_income_edit();
    formatter.print_info(view::income_line(state));
    let income: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Monthly income (base units)")
        .with_initial_text(format!("{}", state.income()))
        .interact_text()?;
    state.set_income(income);
    state.toggle_income_edit();
    formatter.print_success(format!(
        "Income set to {}.",
        state.selected_currency().format(state.income())
    ));
    pause()
}

fn change_currency(state: &mut DashboardState, formatter: &Formatter) -> Result<(), DashboardError> {
    let mut items: Vec<String> = CURRENCIES
        .iter()
        .map(|currency| format!("{} ({})", currency.code, currency.symbol))
        .collect();
    items.push("Other (type a code)".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Display currency")
        .items(&items)
        .default(0)
        .interact()?;

    if choice < CURRENCIES.len() {
        state.set_currency(CURRENCIES[choice].code);
    } else {
        let code: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Currency code")
            .interact_text()?;
        // Unknown codes leave the selection as-is.
        state.set_currency(code.trim());
    }
    formatter.print_success(format!(
        "Displaying amounts in {}.",
        state.selected_currency().code
    ));
    pause()
}

fn export_snapshot(state: &DashboardState, months: &MonthNames) -> Result<(), DashboardError> {
    let snapshot = json!({
        "currency": state.selected_currency(),
        "metrics": state.metrics(),
        "transactions": state.transactions(),
        "expense_breakdown": expense_breakdown(state.transactions()),
        "monthly_totals": monthly_totals(state.transactions(), months, state.selected_currency()),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn clear_screen() -> Result<(), DashboardError> {
    let mut stdout = io::stdout();
    stdout.execute(terminal::Clear(terminal::ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

fn pause() -> Result<(), DashboardError> {
    let _: String = Input::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
