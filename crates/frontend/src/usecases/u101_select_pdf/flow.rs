use contracts::domain::a001_pdf_document::{PdfDocument, PdfDocumentId};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_select_pdf::{SelectPdf, SelectPdfRequest};

use crate::shared::config::{ClientConfig, PollingConfig};
use crate::shared::error::ChatError;
use crate::shared::notification_service::ToastKind;
use crate::shared::session::{ChatApi, ChatView, Sleeper};
use crate::shared::transcript::ChatBubble;

pub const POLL_TIMEOUT_TEXT: &str = "PDF loading timed out. You can still continue.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Ready { attempts: u32 },
    /// Server reported `error`; `message` is its text
    Failed { message: String, attempts: u32 },
    /// Budget exhausted while still loading
    TimedOut { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectResult {
    /// Document may be activated; `poll` is set when readiness was polled
    Activate { poll: Option<PollOutcome> },
    /// Text of the error toast already shown
    Failed { reason: String },
}

/// Ask for the readiness of `pdf_id` until it is ready, failed or the
/// attempt budget is spent.
///
/// Only one status request is in flight at a time. Failed requests are
/// logged and retried after `retry_pause_ms`.
pub async fn poll_until_ready<A, S, V>(
    api: &A,
    sleeper: &S,
    view: &V,
    config: &PollingConfig,
    pdf_id: &PdfDocumentId,
    name: &str,
) -> PollOutcome
where
    A: ChatApi + ?Sized,
    S: Sleeper + ?Sized,
    V: ChatView + ?Sized,
{
    let max = config.max_attempts;
    for attempt in 1..=max {
        log::debug!("Load status of {}: attempt {}/{}", pdf_id, attempt, max);

        let pause = match api.load_status(pdf_id).await {
            Ok(status) if status.is_ready() => {
                log::info!("{} ready after {} attempts", pdf_id, attempt);
                view.toast(&format!("{} loaded successfully!", name), ToastKind::Success, None);
                return PollOutcome::Ready { attempts: attempt };
            }
            Ok(status) if status.is_error() => {
                let message = status.message.unwrap_or_else(|| "Unknown error".to_string());
                log::error!("{} failed to load: {}", pdf_id, message);
                view.toast(&format!("PDF loading error: {}", message), ToastKind::Error, None);
                return PollOutcome::Failed {
                    message,
                    attempts: attempt,
                };
            }
            Ok(_) => config.interval_ms,
            Err(e) if e.is_transport() => {
                log::warn!("Load status request failed: {}", e);
                config.retry_pause_ms
            }
            Err(e) => {
                log::warn!("Unreadable load status: {}", e);
                config.interval_ms
            }
        };

        if attempt < max {
            sleeper.sleep(pause).await;
        }
    }

    log::warn!("{} still loading after {} attempts", pdf_id, max);
    view.toast(POLL_TIMEOUT_TEXT, ToastKind::Warning, None);
    PollOutcome::TimedOut { attempts: max }
}

/// Submit a selection and wait for the document to become usable.
///
/// `on_polling` runs once when the server asks the client to poll. The
/// loading indicator is hidden on every exit. Activation itself is left to
/// the caller, see [`activate_document`].
pub async fn select_document<A, S, V>(
    api: &A,
    sleeper: &S,
    view: &V,
    config: &ClientConfig,
    document: &PdfDocument,
    on_polling: impl FnOnce(),
) -> SelectResult
where
    A: ChatApi + ?Sized,
    S: Sleeper + ?Sized,
    V: ChatView + ?Sized,
{
    view.set_loading(true);
    let result = run_selection(api, sleeper, view, config, document, on_polling).await;
    view.set_loading(false);
    result
}

fn fail<V: ChatView + ?Sized>(view: &V, reason: String) -> SelectResult {
    view.toast(&reason, ToastKind::Error, None);
    SelectResult::Failed { reason }
}

async fn run_selection<A, S, V>(
    api: &A,
    sleeper: &S,
    view: &V,
    config: &ClientConfig,
    document: &PdfDocument,
    on_polling: impl FnOnce(),
) -> SelectResult
where
    A: ChatApi + ?Sized,
    S: Sleeper + ?Sized,
    V: ChatView + ?Sized,
{
    let name = document.display_name();
    log::info!("[{}] Selecting {} ({})", SelectPdf::full_name(), name, document.id);

    let request = SelectPdfRequest::new(document.id.clone());
    let response = match api.select_pdf(&request).await.and_then(|response| {
        if response.success {
            Ok(response)
        } else {
            Err(ChatError::refused(response.error))
        }
    }) {
        Ok(response) => response,
        Err(ChatError::Server(message)) => {
            log::warn!("Selection of {} refused: {}", document.id, message);
            return fail(view, format!("Error: {}", message));
        }
        Err(e) => {
            log::error!("PDF selection error: {}", e);
            return fail(view, format!("PDF selection error: {}", e));
        }
    };

    if !response.needs_polling() {
        return SelectResult::Activate { poll: None };
    }

    view.toast(&format!("{} is loading. Please wait...", name), ToastKind::Info, None);
    on_polling();

    match poll_until_ready(api, sleeper, view, &config.polling, &document.id, &name).await {
        // the poll loop has already shown its own error toast
        PollOutcome::Failed { message, .. } => SelectResult::Failed {
            reason: format!("PDF loading error: {}", message),
        },
        outcome => SelectResult::Activate {
            poll: Some(outcome),
        },
    }
}

/// Make `document` the active one on screen
pub fn activate_document<V>(view: &V, document: &PdfDocument, narrow_breakpoint_px: f64)
where
    V: ChatView + ?Sized,
{
    let name = document.display_name();
    view.show_active_document(document);
    view.set_chat_enabled(true);
    view.reset_transcript(ChatBubble::welcome(&name));
    view.toast(&format!("{} successfully loaded.", name), ToastKind::Success, None);
    view.collapse_document_list_below(narrow_breakpoint_px);
}
