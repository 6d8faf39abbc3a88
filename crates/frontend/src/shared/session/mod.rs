//! Session state and event dispatch of the chat page
//!
//! The Leptos view turns DOM events into [`UiEvent`]s and hands them to the
//! [`Dispatcher`], which owns the [`SessionState`] and talks to the outside
//! world only through the traits in [`ports`].

pub mod dispatcher;
pub mod handle;
pub mod http_api;
pub mod ports;
pub mod signal_view;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{Dispatcher, Outcome, UiEvent};
pub use handle::{BrowserDispatcher, SessionHandle};
pub use http_api::HttpChatApi;
pub use ports::{ChatApi, ChatView, GlooSleeper, PickedFile, Sleeper};
pub use signal_view::SignalChatView;
pub use state::{SelectionPhase, SessionState};
