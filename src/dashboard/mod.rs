//! Dashboard domain models, aggregation, and the view-local state holder.

pub mod aggregate;
pub mod metrics;
pub mod state;
pub mod transaction;

pub use aggregate::{
    aggregate_by_category, aggregate_by_month, sum, CategoryTotal, MonthNames, MonthTotal,
};
pub use metrics::{compute_balance, DashboardMetrics};
pub use state::DashboardState;
pub use transaction::Transaction;
