/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Initial markets fetch rejected or returned malformed data.
    LoadFailure(String),
    /// A comparison-series fetch rejected for a selected asset.
    ChartFetchFailure(String),
    /// A payload failed domain validation at the boundary.
    Validation(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::LoadFailure(msg) => write!(f, "Load Failure: {}", msg),
            DashboardError::ChartFetchFailure(msg) => write!(f, "Chart Fetch Failure: {}", msg),
            DashboardError::Validation(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

// Simple convenience type aliases
pub type LoadResult<T> = Result<T, DashboardError>;
pub type ChartResult<T> = Result<T, DashboardError>;
