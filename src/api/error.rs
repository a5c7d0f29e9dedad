use thiserror::Error;

/// Failure modes of an API call.
///
/// Transport errors are fetch-level failures (connection refused, DNS, broken
/// body); server errors are non-success HTTP statuses whose JSON body may
/// carry an `error` message to surface verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// The server's message where one exists and is non-empty, otherwise the
    /// caller's default string.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message,
            _ => default,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
