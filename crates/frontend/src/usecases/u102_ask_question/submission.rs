use contracts::usecases::u102_ask_question::{ChatRequest, FIELD_QUESTION};

use super::attachment::ImageAttachment;

/// One chat message as it goes over the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSubmission {
    pub request: ChatRequest,
    pub image: Option<ImageAttachment>,
}

impl ChatSubmission {
    /// `None` when there is neither text nor an image
    pub fn build(text: &str, image: Option<ImageAttachment>) -> Option<Self> {
        let request = ChatRequest::from_input(text);
        if request.is_empty() && image.is_none() {
            return None;
        }
        Some(Self { request, image })
    }

    pub fn question(&self) -> Option<&str> {
        self.request.question.as_deref()
    }

    /// Text parts of the multipart body; the image goes as a file part
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        self.question()
            .map(|q| vec![(FIELD_QUESTION, q.to_string())])
            .unwrap_or_default()
    }
}
