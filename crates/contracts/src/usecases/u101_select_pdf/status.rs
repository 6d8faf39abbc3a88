use serde::{Deserialize, Serialize};

/// Preparation state of a selected PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    Error,
    /// Document unknown or the server session expired
    NotFound,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Answer of the readiness endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLoadStatusResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default = "default_state")]
    pub status: LoadState,

    #[serde(default)]
    pub message: Option<String>,
}

fn default_state() -> LoadState {
    LoadState::Unknown
}

impl PdfLoadStatusResponse {
    pub fn is_ready(&self) -> bool {
        self.success && self.status == LoadState::Ready
    }

    pub fn is_error(&self) -> bool {
        self.status == LoadState::Error
    }
}
