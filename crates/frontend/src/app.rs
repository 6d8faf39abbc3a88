use crate::domain::a001_pdf_document::ui::list::PdfDocumentList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::components::loading_indicator::LoadingIndicator;
use crate::shared::config::ClientConfig;
use crate::shared::notification_service::{ToastHost, ToastService};
use crate::shared::session::{SessionHandle, SignalChatView};
use crate::usecases::u102_ask_question::ChatPage;
use contracts::domain::a001_pdf_document::PdfDocument;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig, catalog: Vec<PdfDocument>) -> impl IntoView {
    let global = AppGlobalContext::new();
    provide_context(global);

    let toasts = ToastService::new(config.toast);
    provide_context(toasts);

    // the session writes into these signals, the page renders from them
    let chat = SignalChatView::new(toasts, global);
    provide_context(chat);
    provide_context(SessionHandle::new(chat, config.clone()));
    provide_context(config);

    view! {
        <Shell
            left=move || view! { <PdfDocumentList documents=catalog.clone() /> }.into_any()
            center=|| view! { <ChatPage /> }.into_any()
        />
        <LoadingIndicator visible=Signal::derive(move || chat.is_loading()) />
        <ToastHost />
    }
}
