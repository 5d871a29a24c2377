use thiserror::Error;

/// Failures of a backend call. The `Display` output is what gets shown to the
/// user as plain text; a 401 and a 500 render the same way apart from the code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not reach the booking service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from the booking service: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
