use async_trait::async_trait;
use contracts::domain::a001_pdf_document::PdfDocumentId;
use contracts::usecases::u101_select_pdf::{PdfLoadStatusResponse, SelectPdfRequest, SelectPdfResponse};
use contracts::usecases::u102_ask_question::ChatResponse;

use super::ports::ChatApi;
use crate::shared::error::ChatError;
use crate::usecases::u101_select_pdf::api as select_api;
use crate::usecases::u102_ask_question::api as chat_api;
use crate::usecases::u102_ask_question::ChatSubmission;

/// The real server behind `fetch`
#[derive(Debug, Clone, Default)]
pub struct HttpChatApi {
    base_url: String,
}

impl HttpChatApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn select_pdf(&self, request: &SelectPdfRequest) -> Result<SelectPdfResponse, ChatError> {
        select_api::select_pdf(&self.base_url, request).await
    }

    async fn load_status(&self, pdf_id: &PdfDocumentId) -> Result<PdfLoadStatusResponse, ChatError> {
        select_api::load_status(&self.base_url, pdf_id).await
    }

    async fn ask(&self, submission: &ChatSubmission) -> Result<ChatResponse, ChatError> {
        chat_api::ask(&self.base_url, submission).await
    }
}
