use thiserror::Error;

/// Error type for curve computation and figure building
#[derive(Error, Debug)]
pub enum Error {
    /// A figure builder was called with nothing to plot. A usage error on
    /// the caller's side, so it is not logged.
    #[error("no input provided")]
    NoInput,

    /// A figure builder received more prediction sets than one figure
    /// holds. Logged at error severity before it propagates.
    #[error("too many sets; limit is {limit}")]
    TooManySets { given: usize, limit: usize },

    #[error("length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("empty data: {0}")]
    Empty(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("visualization error: {0}")]
    Visualization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

// Conversion for plotters drawing errors
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("plot rendering error: {}", err))
    }
}
