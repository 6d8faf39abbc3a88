use contracts::domain::a001_pdf_document::PdfDocument;

use crate::usecases::u102_ask_question::attachment::ImageAttachment;

/// Where the selection flow currently is.
///
/// `Idle -> Selecting -> (Polling ->) Idle`; only a user action starts a new
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
    Polling,
}

/// Per-page session: pending attachment, active document, selection phase.
///
/// Owned by the dispatcher and never borrowed across an `.await`.
#[derive(Debug, Default)]
pub struct SessionState {
    attachment: Option<ImageAttachment>,
    active_document: Option<PdfDocument>,
    phase: SelectionPhase,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachment(&self) -> Option<&ImageAttachment> {
        self.attachment.as_ref()
    }

    /// Replace the pending attachment, returning the previous one
    pub fn set_attachment(&mut self, attachment: ImageAttachment) -> Option<ImageAttachment> {
        self.attachment.replace(attachment)
    }

    pub fn take_attachment(&mut self) -> Option<ImageAttachment> {
        self.attachment.take()
    }

    pub fn active_document(&self) -> Option<&PdfDocument> {
        self.active_document.as_ref()
    }

    /// Chat input is unlocked once a document is active
    pub fn chat_enabled(&self) -> bool {
        self.active_document.is_some()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Start a selection and return its generation
    pub fn begin_selection(&mut self) -> u64 {
        self.generation += 1;
        self.phase = SelectionPhase::Selecting;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn mark_polling(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.phase = SelectionPhase::Polling;
        }
    }

    /// Settle a selection. `activated` is the document to make active, or
    /// `None` on failure.
    ///
    /// Returns `false` when a newer selection has started meanwhile; the
    /// state is left alone then.
    pub fn finish_selection(&mut self, generation: u64, activated: Option<PdfDocument>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = SelectionPhase::Idle;
        if let Some(document) = activated {
            self.active_document = Some(document);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str) -> PdfDocument {
        PdfDocument::new(id, format!("{}.pdf", id))
    }

    #[test]
    fn test_selection_phases() {
        let mut state = SessionState::new();
        assert_eq!(state.phase(), SelectionPhase::Idle);
        assert!(!state.chat_enabled());

        let generation = state.begin_selection();
        assert_eq!(state.phase(), SelectionPhase::Selecting);
        state.mark_polling(generation);
        assert_eq!(state.phase(), SelectionPhase::Polling);

        assert!(state.finish_selection(generation, Some(doc("a"))));
        assert_eq!(state.phase(), SelectionPhase::Idle);
        assert!(state.chat_enabled());
        assert_eq!(state.active_document().unwrap().id.as_str(), "a");
    }

    #[test]
    fn test_failed_selection_keeps_previous_document() {
        let mut state = SessionState::new();
        let first = state.begin_selection();
        state.finish_selection(first, Some(doc("a")));

        let second = state.begin_selection();
        assert!(state.finish_selection(second, None));
        assert_eq!(state.active_document().unwrap().id.as_str(), "a");
    }

    #[test]
    fn test_stale_selection_is_rejected() {
        let mut state = SessionState::new();
        let older = state.begin_selection();
        let newer = state.begin_selection();

        state.mark_polling(older);
        assert_eq!(state.phase(), SelectionPhase::Selecting);

        assert!(state.finish_selection(newer, Some(doc("new"))));
        assert!(!state.finish_selection(older, Some(doc("old"))));
        assert_eq!(state.active_document().unwrap().id.as_str(), "new");
    }
}
