use thiserror::Error;

/// Failures at the submission boundary; the transforms themselves never fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("text is empty")]
    EmptyInput,
    #[error("an analysis is already in progress")]
    Busy,
    #[error("analysis was cancelled")]
    Cancelled,
    #[error("analysis failed: {0}")]
    Failure(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
