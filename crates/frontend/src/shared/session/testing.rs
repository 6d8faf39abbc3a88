//! In-memory ports for flow and dispatcher tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use contracts::domain::a001_pdf_document::{PdfDocument, PdfDocumentId};
use contracts::usecases::u101_select_pdf::{
    LoadState, PdfLoadStatusResponse, SelectPdfRequest, SelectPdfResponse,
};
use contracts::usecases::u102_ask_question::ChatResponse;

use super::ports::{ChatApi, ChatView, PickedFile, Sleeper};
use crate::shared::error::ChatError;
use crate::shared::notification_service::ToastKind;
use crate::shared::transcript::ChatBubble;
use crate::usecases::u102_ask_question::submission::ChatSubmission;

/// Scripted server; an exhausted queue answers with a transport error
#[derive(Default)]
pub struct FakeApi {
    selections: RefCell<VecDeque<Result<SelectPdfResponse, ChatError>>>,
    statuses: RefCell<VecDeque<Result<PdfLoadStatusResponse, ChatError>>>,
    answers: RefCell<VecDeque<Result<ChatResponse, ChatError>>>,
    selected: RefCell<Vec<SelectPdfRequest>>,
    polled: RefCell<Vec<PdfDocumentId>>,
    asked: RefCell<Vec<ChatSubmission>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(self, response: Result<SelectPdfResponse, ChatError>) -> Self {
        self.selections.borrow_mut().push_back(response);
        self
    }

    pub fn with_status(self, response: Result<PdfLoadStatusResponse, ChatError>) -> Self {
        self.statuses.borrow_mut().push_back(response);
        self
    }

    pub fn with_statuses(self, states: &[LoadState]) -> Self {
        for state in states {
            self.statuses.borrow_mut().push_back(Ok(status(*state, None)));
        }
        self
    }

    pub fn with_answer(self, response: Result<ChatResponse, ChatError>) -> Self {
        self.answers.borrow_mut().push_back(response);
        self
    }

    pub fn selected(&self) -> Vec<SelectPdfRequest> {
        self.selected.borrow().clone()
    }

    pub fn polled(&self) -> Vec<PdfDocumentId> {
        self.polled.borrow().clone()
    }

    pub fn asked(&self) -> Vec<ChatSubmission> {
        self.asked.borrow().clone()
    }
}

fn exhausted<T>() -> Result<T, ChatError> {
    Err(ChatError::Transport("no scripted response".to_string()))
}

#[async_trait(?Send)]
impl ChatApi for FakeApi {
    async fn select_pdf(&self, request: &SelectPdfRequest) -> Result<SelectPdfResponse, ChatError> {
        self.selected.borrow_mut().push(request.clone());
        self.selections.borrow_mut().pop_front().unwrap_or_else(exhausted)
    }

    async fn load_status(&self, pdf_id: &PdfDocumentId) -> Result<PdfLoadStatusResponse, ChatError> {
        self.polled.borrow_mut().push(pdf_id.clone());
        self.statuses.borrow_mut().pop_front().unwrap_or_else(exhausted)
    }

    async fn ask(&self, submission: &ChatSubmission) -> Result<ChatResponse, ChatError> {
        self.asked.borrow_mut().push(submission.clone());
        self.answers.borrow_mut().pop_front().unwrap_or_else(exhausted)
    }
}

pub fn status(state: LoadState, message: Option<&str>) -> PdfLoadStatusResponse {
    PdfLoadStatusResponse {
        success: state == LoadState::Ready,
        status: state,
        message: message.map(str::to_string),
    }
}

pub fn selection(state: LoadState) -> SelectPdfResponse {
    SelectPdfResponse {
        success: true,
        status: Some(state),
        ..Default::default()
    }
}

/// Yields once instead of waiting and remembers every pause
#[derive(Default)]
pub struct RecordingSleeper {
    pauses: RefCell<Vec<u32>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<u32> {
        self.pauses.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, ms: u32) {
        self.pauses.borrow_mut().push(ms);
        tokio::task::yield_now().await;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Loading(bool),
    Toast(String, ToastKind, Option<u32>),
    Reset(ChatBubble),
    Push(ChatBubble),
    ChatEnabled(bool),
    ActiveDocument(PdfDocument),
    Preview(Option<String>),
    ClearInput,
    FocusInput,
    ToggleList,
    CollapseListBelow(f64),
}

#[derive(Default)]
pub struct RecordingView {
    calls: RefCell<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    /// Transcript as it would be on screen
    pub fn bubbles(&self) -> Vec<ChatBubble> {
        let mut bubbles = Vec::new();
        for call in self.calls.borrow().iter() {
            match call {
                ViewCall::Reset(seed) => {
                    bubbles.clear();
                    bubbles.push(seed.clone());
                }
                ViewCall::Push(bubble) => bubbles.push(bubble.clone()),
                _ => {}
            }
        }
        bubbles
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ViewCall::Toast(text, kind, _) => Some((text.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ViewCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ChatView for RecordingView {
    fn set_loading(&self, loading: bool) {
        self.record(ViewCall::Loading(loading));
    }

    fn toast(&self, message: &str, kind: ToastKind, duration_ms: Option<u32>) {
        self.record(ViewCall::Toast(message.to_string(), kind, duration_ms));
    }

    fn reset_transcript(&self, seed: ChatBubble) {
        self.record(ViewCall::Reset(seed));
    }

    fn push_bubble(&self, bubble: ChatBubble) {
        self.record(ViewCall::Push(bubble));
    }

    fn set_chat_enabled(&self, enabled: bool) {
        self.record(ViewCall::ChatEnabled(enabled));
    }

    fn show_active_document(&self, document: &PdfDocument) {
        self.record(ViewCall::ActiveDocument(document.clone()));
    }

    fn set_attachment_preview(&self, data_url: Option<String>) {
        self.record(ViewCall::Preview(data_url));
    }

    fn clear_input(&self) {
        self.record(ViewCall::ClearInput);
    }

    fn focus_input(&self) {
        self.record(ViewCall::FocusInput);
    }

    fn toggle_document_list(&self) {
        self.record(ViewCall::ToggleList);
    }

    fn collapse_document_list_below(&self, breakpoint_px: f64) {
        self.record(ViewCall::CollapseListBelow(breakpoint_px));
    }
}

/// Picked file whose declared size may differ from its content
pub struct FakeFile {
    name: String,
    mime: String,
    bytes: Vec<u8>,
    declared_size: u64,
    reads: Cell<u32>,
}

impl FakeFile {
    pub fn new(name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            declared_size: bytes.len() as u64,
            bytes,
            reads: Cell::new(0),
        }
    }

    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.declared_size = size;
        self
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

#[async_trait(?Send)]
impl PickedFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime(&self) -> String {
        self.mime.clone()
    }

    fn size(&self) -> u64 {
        self.declared_size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ChatError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.bytes.clone())
    }
}
