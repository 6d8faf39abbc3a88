use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_ask_question::{AskQuestion, ChatResponse};

use crate::shared::error::ChatError;
use crate::shared::notification_service::ToastKind;
use crate::shared::session::{ChatApi, ChatView};
use crate::shared::transcript::{ChatBubble, MessageBody, Sender};

use super::submission::ChatSubmission;

pub const SEND_FAILED_TEXT: &str = "An error occurred while sending the message.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Reply rendered, with its mode tag if any
    Answered { tag: Option<&'static str> },
    /// Server answered but refused; the toast text
    Rejected(String),
    /// Request did not produce a usable answer; the toast text
    Failed(String),
}

/// Render the user's message, post it and render the reply.
///
/// The user bubble stays in place whatever the server answers.
pub async fn send_submission<A, V>(api: &A, view: &V, submission: ChatSubmission) -> SendOutcome
where
    A: ChatApi + ?Sized,
    V: ChatView + ?Sized,
{
    view.set_loading(true);

    let image_url = submission.image.as_ref().map(|i| i.data_url.as_str());
    if let Some(bubble) = ChatBubble::user(submission.question(), image_url) {
        view.push_bubble(bubble);
    }
    view.clear_input();
    view.set_attachment_preview(None);

    log::info!(
        "[{}] Sending question ({} chars, image: {})",
        AskQuestion::full_name(),
        submission.question().map(str::len).unwrap_or(0),
        submission.image.is_some()
    );

    let outcome = match api.ask(&submission).await.and_then(accept_answer) {
        Ok(response) => {
            let tag = response.style_tag();
            let answer = response.answer.unwrap_or_default();
            view.push_bubble(
                ChatBubble::new(Sender::Assistant, MessageBody::Text(answer), None).with_tag(tag),
            );
            SendOutcome::Answered { tag }
        }
        Err(ChatError::Server(message)) => {
            let text = format!("Error: {}", message);
            view.toast(&text, ToastKind::Error, None);
            SendOutcome::Rejected(text)
        }
        Err(e) => {
            log::error!("Message sending error: {}", e);
            let text = failure_text(&e);
            view.toast(&text, ToastKind::Error, None);
            SendOutcome::Failed(text)
        }
    };

    view.set_loading(false);
    view.focus_input();
    outcome
}

/// A `success: false` answer becomes [`ChatError::Server`]
fn accept_answer(response: ChatResponse) -> Result<ChatResponse, ChatError> {
    if response.success {
        return Ok(response);
    }
    if let Some(details) = &response.details {
        log::error!("Chat failed on the server: {}", details);
    }
    Err(ChatError::refused(response.error))
}

/// Answers that were not JSON are shown verbatim
fn failure_text(error: &ChatError) -> String {
    match error {
        ChatError::UnexpectedContent { body, .. } | ChatError::Http { body, .. } => {
            format!("Error: {}", body)
        }
        _ => SEND_FAILED_TEXT.to_string(),
    }
}
