use serde::{Deserialize, Serialize};

/// Kind of content the server produced for a chat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    Chat,
    GenerateSummary,
    GenerateQuiz,
    ExtractKeyConcepts,
    #[serde(other)]
    Other,
}

impl ResponseMode {
    /// CSS modifier for the assistant bubble; styling only
    pub fn style_tag(&self) -> Option<&'static str> {
        match self {
            ResponseMode::GenerateSummary => Some("summary"),
            ResponseMode::GenerateQuiz => Some("quiz"),
            ResponseMode::ExtractKeyConcepts => Some("concepts"),
            ResponseMode::Chat | ResponseMode::Other => None,
        }
    }
}

/// Answer of the chat endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default)]
    pub mode: Option<ResponseMode>,

    #[serde(default)]
    pub error: Option<String>,

    /// Server-side trace, only logged
    #[serde(default)]
    pub details: Option<String>,
}

impl ChatResponse {
    pub fn style_tag(&self) -> Option<&'static str> {
        self.mode.and_then(|m| m.style_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_map_to_style_tags() {
        let cases = [
            ("generate_summary", Some("summary")),
            ("generate_quiz", Some("quiz")),
            ("extract_key_concepts", Some("concepts")),
            ("chat", None),
            ("translate", None),
        ];
        for (mode, tag) in cases {
            let json = format!(r#"{{"success": true, "answer": "x", "mode": "{}"}}"#, mode);
            let response: ChatResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(response.style_tag(), tag, "mode {}", mode);
        }
    }

    #[test]
    fn test_failure_payload() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"success": false, "error": "boom", "details": "Traceback ..."}"#,
        )
        .unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
        assert_eq!(response.style_tag(), None);

        let bare: ChatResponse =
            serde_json::from_str(r#"{"error": "You need to select a PDF first."}"#).unwrap();
        assert!(!bare.success);
        assert!(bare.answer.is_none());
    }
}
