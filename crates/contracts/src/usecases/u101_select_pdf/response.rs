use serde::{Deserialize, Serialize};

use super::status::LoadState;

/// Answer of the selection endpoint.
///
/// Error answers only carry `error` (and no `success`), hence the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectPdfResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub status: Option<LoadState>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub pdf_id: Option<String>,

    #[serde(default)]
    pub pdf_title: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl SelectPdfResponse {
    /// Server is still preparing the document and has to be polled
    pub fn needs_polling(&self) -> bool {
        self.success && self.status == Some(LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_answer_needs_polling() {
        let json = r#"{
            "success": true,
            "message": "PDF selected: report.pdf",
            "pdf_id": "12",
            "pdf_title": "report.pdf",
            "status": "loading"
        }"#;
        let response: SelectPdfResponse = serde_json::from_str(json).unwrap();
        assert!(response.needs_polling());
        assert_eq!(response.pdf_title.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn test_ready_answer_does_not_poll() {
        let response: SelectPdfResponse =
            serde_json::from_str(r#"{"success": true, "status": "ready"}"#).unwrap();
        assert!(!response.needs_polling());
    }

    #[test]
    fn test_error_answer_without_success_flag() {
        let response: SelectPdfResponse =
            serde_json::from_str(r#"{"error": "PDF not found."}"#).unwrap();
        assert!(!response.success);
        assert!(!response.needs_polling());
        assert_eq!(response.error.as_deref(), Some("PDF not found."));
    }
}
