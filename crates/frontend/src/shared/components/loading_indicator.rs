use leptos::prelude::*;
use thaw::*;

/// Full-area overlay shown while a request is in flight
#[component]
pub fn LoadingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div id="loading-indicator" class="loading-overlay">
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                    <Spinner />
                    <span>"Processing..."</span>
                </Flex>
            </div>
        </Show>
    }
}
