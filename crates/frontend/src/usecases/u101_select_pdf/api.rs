use contracts::domain::a001_pdf_document::PdfDocumentId;
use contracts::usecases::u101_select_pdf::{
    PdfLoadStatusQuery, PdfLoadStatusResponse, SelectPdfRequest, SelectPdfResponse,
    LOAD_STATUS_PATH, SELECT_PDF_PATH,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, form_data, read_ok_response, read_response};
use crate::shared::error::ChatError;

/// POST the selection as multipart form
pub async fn select_pdf(base_url: &str, request: &SelectPdfRequest) -> Result<SelectPdfResponse, ChatError> {
    let form = form_data(&request.form_fields())?;
    let response = Request::post(&api_url(base_url, SELECT_PDF_PATH))
        .body(form)
        .map_err(|e| ChatError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    read_response(response).await
}

/// GET the preparation state of a selected PDF; non-2xx answers are `Http` errors
pub async fn load_status(base_url: &str, pdf_id: &PdfDocumentId) -> Result<PdfLoadStatusResponse, ChatError> {
    let query = serde_qs::to_string(&PdfLoadStatusQuery {
        pdf_id: pdf_id.as_str().to_string(),
    })
    .map_err(|e| ChatError::Transport(e.to_string()))?;

    let url = format!("{}?{}", api_url(base_url, LOAD_STATUS_PATH), query);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    // the poll loop retries failed requests, so their JSON bodies are not answers
    read_ok_response(response).await
}
