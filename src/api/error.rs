use axum::http::StatusCode;
use thiserror::Error;

/// Reasons a request never reaches the engine.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("loanTerm must be at most {max} years, got {got}")]
    LoanTermTooLong { got: f64, max: u32 },
    #[error("at most {max} unit rents are supported, got {got}")]
    TooManyUnits { got: usize, max: usize },
    #[error("invalid request: {0}")]
    Body(String),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RequestError::LoanTermTooLong { .. }
            | RequestError::TooManyUnits { .. }
            | RequestError::Body(_)
            | RequestError::Cli(_) => StatusCode::BAD_REQUEST,
        }
    }
}
