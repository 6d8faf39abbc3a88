use std::cell::{Ref, RefCell};

use contracts::domain::a001_pdf_document::{PdfDocument, PdfDocumentId};

use super::ports::{ChatApi, ChatView, PickedFile, Sleeper};
use super::state::SessionState;
use crate::shared::config::ClientConfig;
use crate::shared::notification_service::ToastKind;
use crate::usecases::u101_select_pdf::{activate_document, select_document, PollOutcome, SelectResult};
use crate::usecases::u102_ask_question::{load_attachment, send_submission, ChatSubmission, SendOutcome};

/// Everything the page can ask the session to do
pub enum UiEvent {
    SelectDocument(PdfDocument),
    Submit { text: String },
    /// Preset prompt, sent as if typed
    Command(String),
    ImagePicked(Box<dyn PickedFile>),
    ClearImage,
    ToggleDocumentList,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SelectDocument(_) => "select_document",
            UiEvent::Submit { .. } => "submit",
            UiEvent::Command(_) => "command",
            UiEvent::ImagePicked(_) => "image_picked",
            UiEvent::ClearImage => "clear_image",
            UiEvent::ToggleDocumentList => "toggle_document_list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DocumentActivated {
        id: PdfDocumentId,
        poll: Option<PollOutcome>,
    },
    SelectionFailed(String),
    /// A newer selection started while this one was in flight
    Superseded,
    Sent(SendOutcome),
    AttachmentSet,
    AttachmentRejected(String),
    AttachmentCleared,
    Ignored,
    LayoutToggled,
}

/// Routes [`UiEvent`]s to the flows and owns the session state
pub struct Dispatcher<A, S, V> {
    api: A,
    sleeper: S,
    view: V,
    config: ClientConfig,
    state: RefCell<SessionState>,
}

impl<A, S, V> Dispatcher<A, S, V>
where
    A: ChatApi,
    S: Sleeper,
    V: ChatView,
{
    pub fn new(api: A, sleeper: S, view: V, config: ClientConfig) -> Self {
        Self {
            api,
            sleeper,
            view,
            config,
            state: RefCell::new(SessionState::new()),
        }
    }

    pub fn state(&self) -> Ref<'_, SessionState> {
        self.state.borrow()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn dispatch(&self, event: UiEvent) -> Outcome {
        let name = event.name();
        log::debug!("event: {}", name);

        let outcome = match event {
            UiEvent::SelectDocument(document) => self.select(document).await,
            UiEvent::Submit { text } => self.submit(&text).await,
            UiEvent::Command(text) => {
                if self.state.borrow().chat_enabled() {
                    self.submit(&text).await
                } else {
                    Outcome::Ignored
                }
            }
            UiEvent::ImagePicked(file) => self.pick_image(file.as_ref()).await,
            UiEvent::ClearImage => {
                self.state.borrow_mut().take_attachment();
                self.view.set_attachment_preview(None);
                Outcome::AttachmentCleared
            }
            UiEvent::ToggleDocumentList => {
                self.view.toggle_document_list();
                Outcome::LayoutToggled
            }
        };

        log::debug!("event {} -> {:?}", name, outcome);
        outcome
    }

    async fn select(&self, document: PdfDocument) -> Outcome {
        let generation = self.state.borrow_mut().begin_selection();

        let result = select_document(
            &self.api,
            &self.sleeper,
            &self.view,
            &self.config,
            &document,
            || self.state.borrow_mut().mark_polling(generation),
        )
        .await;

        match result {
            SelectResult::Activate { poll } => {
                if !self
                    .state
                    .borrow_mut()
                    .finish_selection(generation, Some(document.clone()))
                {
                    log::info!("Selection of {} superseded", document.id);
                    return Outcome::Superseded;
                }
                activate_document(&self.view, &document, self.config.layout.narrow_breakpoint_px);
                Outcome::DocumentActivated {
                    id: document.id,
                    poll,
                }
            }
            SelectResult::Failed { reason } => {
                if self.state.borrow_mut().finish_selection(generation, None) {
                    Outcome::SelectionFailed(reason)
                } else {
                    Outcome::Superseded
                }
            }
        }
    }

    async fn submit(&self, text: &str) -> Outcome {
        let image = self.state.borrow_mut().take_attachment();
        match ChatSubmission::build(text, image) {
            Some(submission) => {
                Outcome::Sent(send_submission(&self.api, &self.view, submission).await)
            }
            None => Outcome::Ignored,
        }
    }

    async fn pick_image(&self, file: &dyn PickedFile) -> Outcome {
        match load_attachment(file, self.config.attachments.max_image_bytes).await {
            Ok(attachment) => {
                self.view.set_attachment_preview(Some(attachment.data_url.clone()));
                self.state.borrow_mut().set_attachment(attachment);
                Outcome::AttachmentSet
            }
            Err(e) => {
                let message = e.to_string();
                self.view.toast(&message, ToastKind::Error, None);
                Outcome::AttachmentRejected(message)
            }
        }
    }
}
