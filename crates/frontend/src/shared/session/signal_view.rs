use contracts::domain::a001_pdf_document::PdfDocument;
use leptos::html;
use leptos::prelude::*;

use super::ports::ChatView;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notification_service::{ToastKind, ToastService};
use crate::shared::transcript::ChatBubble;

/// [`ChatView`] over Leptos signals; the chat page renders from these
#[derive(Clone, Copy)]
pub struct SignalChatView {
    /// Requests currently in flight; the overlay shows while any remain
    pending: RwSignal<u32>,
    pub transcript: RwSignal<Vec<ChatBubble>>,
    pub chat_enabled: RwSignal<bool>,
    pub preview: RwSignal<Option<String>>,
    pub input: RwSignal<String>,
    pub input_ref: NodeRef<html::Input>,
    toasts: ToastService,
    global: AppGlobalContext,
}

impl SignalChatView {
    pub fn new(toasts: ToastService, global: AppGlobalContext) -> Self {
        Self {
            pending: RwSignal::new(0),
            transcript: RwSignal::new(Vec::new()),
            chat_enabled: RwSignal::new(false),
            preview: RwSignal::new(None),
            input: RwSignal::new(String::new()),
            input_ref: NodeRef::new(),
            toasts,
            global,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }
}

fn next_pending(current: u32, loading: bool) -> u32 {
    if loading {
        current + 1
    } else {
        current.saturating_sub(1)
    }
}

impl ChatView for SignalChatView {
    fn set_loading(&self, loading: bool) {
        self.pending.update(|pending| *pending = next_pending(*pending, loading));
    }

    fn toast(&self, message: &str, kind: ToastKind, duration_ms: Option<u32>) {
        self.toasts.show(message, kind, duration_ms);
    }

    fn reset_transcript(&self, seed: ChatBubble) {
        self.transcript.set(vec![seed]);
    }

    fn push_bubble(&self, bubble: ChatBubble) {
        self.transcript.update(|bubbles| bubbles.push(bubble));
    }

    fn set_chat_enabled(&self, enabled: bool) {
        self.chat_enabled.set(enabled);
    }

    fn show_active_document(&self, document: &PdfDocument) {
        self.global.active_document.set(Some(document.clone()));
    }

    fn set_attachment_preview(&self, data_url: Option<String>) {
        self.preview.set(data_url);
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn focus_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    fn toggle_document_list(&self) {
        self.global.toggle_left();
    }

    fn collapse_document_list_below(&self, breakpoint_px: f64) {
        self.global.collapse_left_below(breakpoint_px);
    }
}
