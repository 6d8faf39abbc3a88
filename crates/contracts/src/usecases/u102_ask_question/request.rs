use serde::{Deserialize, Serialize};

/// Multipart part carrying the question text
pub const FIELD_QUESTION: &str = "question";

/// Multipart part carrying the image file
pub const FIELD_IMAGE: &str = "image";

/// Text part of a chat submission.
///
/// The image travels as a file part next to it and is therefore not part of
/// this DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl ChatRequest {
    /// Trims the text; blank input yields no question part at all
    pub fn from_input(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            question: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_trims() {
        assert_eq!(
            ChatRequest::from_input("  what is this?\n").question.as_deref(),
            Some("what is this?")
        );
        assert!(ChatRequest::from_input(" \t\n ").is_empty());
        assert!(ChatRequest::from_input("").is_empty());
    }
}
