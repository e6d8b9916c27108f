//! Failure taxonomy for video requests.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VideoError {
    /// The request never produced a response (connection refused, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Decode(String),

    /// The backend answered with a non-success status.
    #[error("HTTP error: {status}")]
    Application {
        status: u16,
        message: Option<String>,
    },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, VideoError>;

impl VideoError {
    /// Text for the error toast. Transport failures and server errors without
    /// a message collapse into `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            VideoError::Validation(message) => message.clone(),
            VideoError::Application {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
