use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::session::{SessionHandle, UiEvent};
use contracts::domain::a001_pdf_document::PdfDocument;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PdfDocumentRow {
    pub document: PdfDocument,
    pub name: String,
    pub description: String,
}

impl From<PdfDocument> for PdfDocumentRow {
    fn from(document: PdfDocument) -> Self {
        Self {
            name: document.display_name(),
            description: document.description.clone().unwrap_or_default(),
            document,
        }
    }
}

/// Selectable documents; the active one is highlighted
#[component]
#[allow(non_snake_case)]
pub fn PdfDocumentList(documents: Vec<PdfDocument>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let session = use_context::<SessionHandle>().expect("SessionHandle not found in context");

    let rows: Vec<PdfDocumentRow> = documents.into_iter().map(Into::into).collect();
    let is_empty = rows.is_empty();

    let items = rows
        .into_iter()
        .map(|row| {
            let id = row.document.id.clone();
            let document = row.document;
            view! {
                <li
                    class="pdf-item"
                    class:active=move || ctx.is_active(&id)
                    title=row.description
                    on:click=move |_| session.send(UiEvent::SelectDocument(document.clone()))
                >
                    {icon("file")}
                    <span class="pdf-item__name">{row.name}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="pdf-list">
            <h3 class="pdf-list__header">"Documents"</h3>
            <Show when=move || is_empty>
                <p class="pdf-list__empty">"No PDFs available."</p>
            </Show>
            <ul>{items}</ul>
        </div>
    }
}
