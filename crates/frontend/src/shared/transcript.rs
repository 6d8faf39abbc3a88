//! Chat bubbles as shown in the transcript
//!
//! Bubbles carry finished markup; there is no message history beyond what
//! is on screen.

use super::date_utils::now_time;
use super::markup::{format_content, image_tag, welcome_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// Content of a bubble before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Plain text, goes through [`format_content`]
    Text(String),
    /// Already built markup, inserted as is
    Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBubble {
    pub sender: Sender,
    pub html: String,
    pub time: String,
    /// Response mode modifier (summary, quiz, concepts)
    pub tag: Option<&'static str>,
}

impl ChatBubble {
    /// Render a message; `timestamp` defaults to now
    pub fn new(sender: Sender, body: MessageBody, timestamp: Option<String>) -> Self {
        let html = match body {
            MessageBody::Text(text) => format_content(&text),
            MessageBody::Markup(markup) => markup,
        };
        Self {
            sender,
            html,
            time: timestamp.unwrap_or_else(now_time),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<&'static str>) -> Self {
        self.tag = tag;
        self
    }

    /// Optimistic bubble of the user's own submission.
    ///
    /// Text and image end up in one bubble, the image below the text.
    /// Returns `None` when there is nothing to show.
    pub fn user(text: Option<&str>, image_data_url: Option<&str>) -> Option<Self> {
        let body = match (text, image_data_url) {
            (None, None) => return None,
            (Some(text), None) => MessageBody::Text(text.to_string()),
            (None, Some(url)) => MessageBody::Markup(image_tag(url)),
            (Some(text), Some(url)) => {
                MessageBody::Markup(format!("{}<br>{}", format_content(text), image_tag(url)))
            }
        };
        Some(Self::new(Sender::User, body, None))
    }

    pub fn welcome(document_name: &str) -> Self {
        Self::new(
            Sender::Assistant,
            MessageBody::Text(welcome_text(document_name)),
            None,
        )
    }

    /// CSS classes of the bubble root, e.g. "message assistant quiz"
    pub fn css_class(&self) -> String {
        match self.tag {
            Some(tag) => format!("message {} {}", self.sender.css_class(), tag),
            None => format!("message {}", self.sender.css_class()),
        }
    }
}
