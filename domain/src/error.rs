use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response whose body was not the expected payload.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The response decoded but reported a failure.
    #[error("{0}")]
    Application(String),

    /// The payload decoded but its content cannot be rendered.
    #[error("{0}")]
    InvalidPayload(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::Status { .. } | ApiError::Decode(_)
        )
    }
}

/// Client-side checks that stop an action before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a document first")]
    NoDocumentSelected,

    #[error("Admin privileges required")]
    AdminRequired,
}
