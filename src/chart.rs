//! Render-ready chart payloads.
//!
//! The core builds these data points; the charting collaborator (pie and
//! bar renderers) only draws them. Colors are assigned here so every
//! renderer agrees on which category gets which slice color.

use serde::Serialize;

use crate::currency::Currency;
use crate::dashboard::{aggregate_by_category, aggregate_by_month, MonthNames, Transaction};

/// Fixed slice palette; entry `i` of a series gets `PALETTE[i % 6]`.
pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d",
];

/// One pie slice of the expense breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    /// Share of the grand total, in percent. Zero when the total is zero.
    pub percent: f64,
    pub color: &'static str,
}

/// One bar of the monthly-expense chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub month: String,
    pub value: f64,
    /// Tooltip text in the selected display currency.
    pub tooltip: String,
}

/// Category breakdown with palette colors and percent shares, in
/// first-seen category order.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<ChartSlice> {
    let totals = aggregate_by_category(transactions);
    let grand_total: f64 = totals.iter().map(|entry| entry.total).sum();
    totals
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            label: entry.category,
            value: entry.total,
            percent: if grand_total > 0.0 {
                entry.total / grand_total * 100.0
            } else {
                0.0
            },
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}

/// Month totals with tooltips formatted in the selected currency, in
/// first-seen month order.
pub fn monthly_totals(
    transactions: &[Transaction],
    months: &MonthNames,
    currency: &Currency,
) -> Vec<ChartBar> {
    aggregate_by_month(transactions, months)
        .into_iter()
        .map(|entry| ChartBar {
            tooltip: currency.format(entry.total),
            month: entry.month,
            value: entry.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::find_by_code;

    #[test]
    fn palette_cycles_after_six_slices() {
        let transactions: Vec<Transaction> = (0..8)
            .map(|i| Transaction::new(1.0, format!("cat-{i}"), "", "2024-01-01"))
            .collect();
        let slices = expense_breakdown(&transactions);
        assert_eq!(slices.len(), 8);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[6].color, PALETTE[0]);
        assert_eq!(slices[7].color, PALETTE[1]);
    }

    #[test]
    fn percents_cover_the_whole_pie() {
        let transactions = vec![
            Transaction::new(80.0, "Food", "", "2024-01-05"),
            Transaction::new(20.0, "Transport", "", "2024-01-15"),
        ];
        let slices = expense_breakdown(&transactions);
        assert!((slices[0].percent - 80.0).abs() < 1e-9);
        let total: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tooltips_use_the_selected_currency() {
        let transactions = vec![Transaction::new(100.0, "Food", "", "2024-01-05")];
        let inr = find_by_code("INR").unwrap();
        let bars = monthly_totals(&transactions, &MonthNames::default(), inr);
        assert_eq!(bars[0].month, "Jan");
        assert_eq!(bars[0].tooltip, "₹8328.00");
    }
}
