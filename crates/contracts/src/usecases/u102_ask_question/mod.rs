pub mod request;
pub mod response;

pub use request::{ChatRequest, FIELD_IMAGE, FIELD_QUESTION};
pub use response::{ChatResponse, ResponseMode};

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn display_name() -> &'static str {
        "Ask question"
    }

    fn description() -> &'static str {
        "Sends a question and an optional image about the active PDF"
    }
}

/// Chat endpoint (multipart POST)
pub const CHAT_PATH: &str = "/chat";
