pub mod common;
pub mod u101_select_pdf;
pub mod u102_ask_question;
