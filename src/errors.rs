use thiserror::Error;

/// Error type for the dashboard's fallible seams (terminal I/O, JSON
/// export). Aggregation, formatting, and state transitions are total and
/// never produce one of these.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for DashboardError {
    fn from(err: dialoguer::Error) -> Self {
        DashboardError::Prompt(err.to_string())
    }
}
