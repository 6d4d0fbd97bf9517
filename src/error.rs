use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx status. `body` is the raw response text.
    #[error("API error ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Analysis #{id} was not found")]
    NotFound { id: i64 },

    #[error("Invalid response format from server: {0}")]
    MalformedResponse(String),

    #[error("Cannot reach the analysis server: {0}")]
    NetworkUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}
