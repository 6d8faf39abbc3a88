//! Error types of the chat client
//!
//! Every failure path ends in a toast, so the `Display` texts are user facing.

use thiserror::Error;

/// Rejection of a picked file before anything is read or sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Please select a valid image file")]
    NotAnImage { mime: String },

    #[error("Image file should be less than {}MB", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// fetch itself failed (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx answer that is not taken as a payload
    #[error("Server error {status}: {body}")]
    Http { status: u16, body: String },

    /// `success: false` with the server's own text
    #[error("{0}")]
    Server(String),

    #[error("Unexpected response type: {content_type}")]
    UnexpectedContent { content_type: String, body: String },

    #[error("JSON parsing error: {0}")]
    Decode(String),

    #[error("Could not read file: {0}")]
    File(String),
}

impl ChatError {
    /// `success: false` answer; a missing text becomes "Unknown error"
    pub fn refused(error: Option<String>) -> Self {
        ChatError::Server(error.unwrap_or_else(|| "Unknown error".to_string()))
    }

    /// Failures of the request itself rather than of its payload
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_) | ChatError::Http { .. })
    }
}
