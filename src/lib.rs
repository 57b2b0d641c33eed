#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the state, aggregation, and currency conversion
//! primitives that power an expense-tracking dashboard view.

pub mod chart;
pub mod cli;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
