//! Documents the host page offers for chatting
//!
//! The page embeds them as `<script id="pdf-catalog" type="application/json">`.

use contracts::domain::a001_pdf_document::PdfDocument;

pub const CATALOG_ELEMENT_ID: &str = "pdf-catalog";

pub fn parse_catalog(source: &str) -> Result<Vec<PdfDocument>, serde_json::Error> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(source)
}

/// Missing or malformed catalogs give an empty list
pub fn load_catalog() -> Vec<PdfDocument> {
    let source = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(source) = source else {
        log::warn!("No #{} element, document list is empty", CATALOG_ELEMENT_ID);
        return Vec::new();
    };

    match parse_catalog(&source) {
        Ok(documents) => {
            log::info!("Catalog: {} documents", documents.len());
            documents
        }
        Err(e) => {
            log::warn!("Ignoring malformed #{}: {}", CATALOG_ELEMENT_ID, e);
            Vec::new()
        }
    }
}
