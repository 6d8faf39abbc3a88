use contracts::domain::a001_pdf_document::{PdfDocument, PdfDocumentId};
use leptos::prelude::*;
use web_sys::window;

/// Page-wide layout state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Document list panel visibility
    pub left_open: RwSignal<bool>,
    pub active_document: RwSignal<Option<PdfDocument>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            active_document: RwSignal::new(None),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Close the document list on viewports narrower than `breakpoint_px`
    pub fn collapse_left_below(&self, breakpoint_px: f64) {
        let width = window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        if width.is_some_and(|w| w < breakpoint_px) {
            self.left_open.set(false);
        }
    }

    pub fn is_active(&self, id: &PdfDocumentId) -> bool {
        self.active_document
            .with(|doc| doc.as_ref().is_some_and(|d| &d.id == id))
    }

    /// Title bar text
    pub fn title(&self) -> String {
        self.active_document
            .with(|doc| doc.as_ref().map(|d| d.display_name()))
            .unwrap_or_else(|| "Select a PDF to start".to_string())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
