use leptos::html;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::config::ClientConfig;
use crate::shared::session::{SessionHandle, SignalChatView, UiEvent};

/// Transcript, composer and command shortcuts
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = use_context::<SignalChatView>().expect("SignalChatView not provided in context");
    let session = use_context::<SessionHandle>().expect("SessionHandle not provided in context");
    let config = use_context::<ClientConfig>().expect("ClientConfig not provided in context");

    let messages_ref = NodeRef::<html::Div>::new();
    let file_ref = NodeRef::<html::Input>::new();

    // keep the newest bubble in sight
    Effect::new(move |_| {
        chat.transcript.track();
        if let Some(messages) = messages_ref.get() {
            messages.set_scroll_top(messages.scroll_height());
        }
    });

    let disabled = move || !chat.chat_enabled.get();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.send(UiEvent::Submit {
            text: chat.input.get_untracked(),
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            session.send(UiEvent::ImagePicked(Box::new(file)));
        }
        // allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = file_ref.get_untracked() {
            input.click();
        }
    };

    let commands = config
        .commands
        .into_iter()
        .map(|command| {
            let text = command.text.clone();
            view! {
                <Button
                    variant="secondary"
                    class="cmd-btn"
                    title=command.text
                    disabled=Signal::derive(disabled)
                    on_click=Callback::new(move |_| session.send(UiEvent::Command(text.clone())))
                >
                    {command.label}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="chat-container">
            <div id="chat-messages" class="chat-messages" node_ref=messages_ref>
                {move || {
                    chat.transcript
                        .get()
                        .into_iter()
                        .map(|bubble| {
                            let class = bubble.css_class();
                            view! {
                                <div class=class>
                                    <div class="message-content" inner_html=bubble.html></div>
                                    <div class="message-time">{bubble.time}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="command-buttons">{commands}</div>

            <Show when=move || chat.preview.get().is_some()>
                <div id="image-preview-container" class="image-preview-container">
                    <img
                        id="image-preview"
                        alt="Attachment preview"
                        src=move || chat.preview.get().unwrap_or_default()
                    />
                    <Button
                        variant="ghost"
                        class="clear-image-btn"
                        icon_name="x"
                        title="Remove image"
                        on_click=Callback::new(move |_| session.send(UiEvent::ClearImage))
                    />
                </div>
            </Show>

            <form class="chat-input-form" on:submit=on_submit>
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=file_ref
                    on:change=on_file
                />
                <Button
                    variant="ghost"
                    icon_name="image"
                    title="Attach image"
                    disabled=Signal::derive(disabled)
                    on_click=Callback::new(open_picker)
                />
                <input
                    type="text"
                    id="message-input"
                    placeholder="Ask a question about the PDF..."
                    autocomplete="off"
                    node_ref=chat.input_ref
                    prop:value=move || chat.input.get()
                    on:input=move |ev| chat.input.set(event_target_value(&ev))
                    disabled=disabled
                />
                <Button
                    button_type="submit"
                    icon_name="send"
                    title="Send"
                    disabled=Signal::derive(disabled)
                />
            </form>
        </div>
    }
}
