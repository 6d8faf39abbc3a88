//! TopHeader component - application top bar.
//!
//! Contains the document list toggle and the title of the active document.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::session::{SessionHandle, UiEvent};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = leptos::context::use_context::<SessionHandle>().expect("SessionHandle not found");

    let is_list_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| session.send(UiEvent::ToggleDocumentList)
                title=move || if is_list_visible() { "Hide documents" } else { "Show documents" }
            >
                {move || if is_list_visible() {
                    icon("panel-left-close")
                } else {
                    icon("panel-left-open")
                }}
            </button>

            <div class="top-header__brand">
                <span class="top-header__app">"PDF Chat"</span>
                <span id="current-pdf-title" class="top-header__title">{move || ctx.title()}</span>
            </div>
        </div>
    }
}
