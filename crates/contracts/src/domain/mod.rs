pub mod a001_pdf_document;
