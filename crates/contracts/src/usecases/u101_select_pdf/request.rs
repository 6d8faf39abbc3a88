use serde::{Deserialize, Serialize};

use crate::domain::a001_pdf_document::PdfDocumentId;

/// Selection of an already stored PDF.
///
/// Sent as multipart form data, see [`SelectPdfRequest::form_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectPdfRequest {
    pub pdf_id: PdfDocumentId,
}

impl SelectPdfRequest {
    pub fn new(pdf_id: PdfDocumentId) -> Self {
        Self { pdf_id }
    }

    /// Form parts in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("select_existing", "true".to_string()),
            ("pdf_id", self.pdf_id.as_str().to_string()),
        ]
    }
}

/// Query string of the readiness endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLoadStatusQuery {
    pub pdf_id: String,
}
