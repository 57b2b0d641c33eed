//! Display currencies and amount formatting.
//!
//! Amounts are stored in base units (USD-equivalent) everywhere in the
//! crate; conversion happens only at the formatting boundary.

use once_cell::sync::Lazy;
use serde::Serialize;

/// A supported display currency with a fixed conversion rate from base
/// units. The table is static for the process lifetime; there is no rate
/// fetching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Currency {
    /// ISO 4217 three-letter code.
    pub code: &'static str,
    /// Display glyph prefixed to formatted amounts.
    pub symbol: &'static str,
    /// Multiplicative factor from base units to this currency.
    pub rate: f64,
}

/// Supported currencies, in selection-menu order. The first entry is the
/// default selection for a fresh dashboard.
pub static CURRENCIES: Lazy<Vec<Currency>> = Lazy::new(|| {
    vec![
        Currency {
            code: "USD",
            symbol: "$",
            rate: 1.0,
        },
        Currency {
            code: "INR",
            symbol: "₹",
            rate: 83.28,
        },
        Currency {
            code: "EUR",
            symbol: "€",
            rate: 0.92,
        },
        Currency {
            code: "GBP",
            symbol: "£",
            rate: 0.79,
        },
    ]
});

/// Looks up a currency by exact code match.
pub fn find_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// The default selection for a fresh dashboard view.
pub fn default_currency() -> &'static Currency {
    &CURRENCIES[0]
}

impl Currency {
    /// Converts a base-unit amount into this currency's display amount.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    /// Renders a base-unit amount as `symbol` + converted value with
    /// exactly two fraction digits.
    ///
    /// Rounding follows Rust's fixed-point `format!`: the exact binary
    /// value is rounded to nearest, ties to even. Exact decimal `.005`
    /// boundaries therefore resolve by their binary representation, not
    /// by a decimal half-up rule.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, self.convert(amount))
    }
}
