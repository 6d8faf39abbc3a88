pub mod request;
pub mod response;
pub mod status;

pub use request::{PdfLoadStatusQuery, SelectPdfRequest};
pub use response::SelectPdfResponse;
pub use status::{LoadState, PdfLoadStatusResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct SelectPdf;

impl UseCaseMetadata for SelectPdf {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "select_pdf"
    }

    fn display_name() -> &'static str {
        "Select document"
    }

    fn description() -> &'static str {
        "Activates a stored PDF for chatting and waits until the server has prepared it"
    }
}

/// Selection endpoint (multipart POST)
pub const SELECT_PDF_PATH: &str = "/select_pdf";

/// Readiness endpoint (GET with `pdf_id` query)
pub const LOAD_STATUS_PATH: &str = "/pdf_load_status";
