use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response validation failed: {0}")]
    Validation(#[source] BoxError),
}

impl ClientError {
    /// Status code carried by an [`ClientError::HttpStatus`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Short label used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "transport",
            ClientError::HttpStatus(_) => "http_status",
            ClientError::Decode(_) => "decode",
            ClientError::Validation(_) => "validation",
        }
    }
}
