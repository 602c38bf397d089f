use thiserror::Error;

/// Errors raised while building or emitting a plot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The request cannot be turned into a well-formed `PlotSpec`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The plotting engine refused a `set`/`plot` call. Passed through untouched.
    #[error("sink rejected call: {0}")]
    SinkRejected(String),
}

impl PlotError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PlotError::InvalidInput(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        PlotError::SinkRejected(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
