use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dispatcher::{Dispatcher, UiEvent};
use super::http_api::HttpChatApi;
use super::ports::GlooSleeper;
use super::signal_view::SignalChatView;
use crate::shared::config::ClientConfig;

pub type BrowserDispatcher = Dispatcher<HttpChatApi, GlooSleeper, SignalChatView>;

/// Copyable entry point for components; events run as local tasks
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<Rc<BrowserDispatcher>, LocalStorage>);

impl SessionHandle {
    pub fn new(view: SignalChatView, config: ClientConfig) -> Self {
        let api = HttpChatApi::new(config.api.base_url.clone());
        let dispatcher = Dispatcher::new(api, GlooSleeper, view, config);
        Self(StoredValue::new_local(Rc::new(dispatcher)))
    }

    pub fn send(&self, event: UiEvent) {
        let dispatcher = self.0.get_value();
        spawn_local(async move {
            dispatcher.dispatch(event).await;
        });
    }
}
