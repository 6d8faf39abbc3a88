pub mod aggregate;

pub use aggregate::{PdfDocument, PdfDocumentId};
