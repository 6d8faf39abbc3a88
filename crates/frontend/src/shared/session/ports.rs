use async_trait::async_trait;
use contracts::domain::a001_pdf_document::{PdfDocument, PdfDocumentId};
use contracts::usecases::u101_select_pdf::{PdfLoadStatusResponse, SelectPdfRequest, SelectPdfResponse};
use contracts::usecases::u102_ask_question::ChatResponse;

use crate::shared::error::ChatError;
use crate::shared::notification_service::ToastKind;
use crate::shared::transcript::ChatBubble;
use crate::usecases::u102_ask_question::submission::ChatSubmission;

/// The three server endpoints
#[async_trait(?Send)]
pub trait ChatApi {
    async fn select_pdf(&self, request: &SelectPdfRequest) -> Result<SelectPdfResponse, ChatError>;

    async fn load_status(&self, pdf_id: &PdfDocumentId) -> Result<PdfLoadStatusResponse, ChatError>;

    async fn ask(&self, submission: &ChatSubmission) -> Result<ChatResponse, ChatError>;
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, ms: u32);
}

/// Browser timer
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Everything the flows may change on screen
pub trait ChatView {
    fn set_loading(&self, loading: bool);

    /// `duration_ms: None` uses the configured default
    fn toast(&self, message: &str, kind: ToastKind, duration_ms: Option<u32>);

    /// Drop all bubbles and start over with `seed`
    fn reset_transcript(&self, seed: ChatBubble);

    fn push_bubble(&self, bubble: ChatBubble);

    /// Message input, send button and command shortcuts
    fn set_chat_enabled(&self, enabled: bool);

    /// Title text and highlighted list entry
    fn show_active_document(&self, document: &PdfDocument);

    fn set_attachment_preview(&self, data_url: Option<String>);

    fn clear_input(&self);

    fn focus_input(&self);

    fn toggle_document_list(&self);

    /// Collapse the document list when the viewport is narrower than `breakpoint_px`
    fn collapse_document_list_below(&self, breakpoint_px: f64);
}

/// A file chosen in the picker, read lazily so it can be validated first
#[async_trait(?Send)]
pub trait PickedFile {
    fn name(&self) -> String;

    fn mime(&self) -> String;

    fn size(&self) -> u64;

    async fn read_bytes(&self) -> Result<Vec<u8>, ChatError>;
}
