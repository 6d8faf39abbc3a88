//! Toast notifications
//!
//! Each toast owns its expiry timer: it stays for `duration_ms`, fades for
//! `fade_ms` and is then removed. Any number of toasts may be visible.

use crate::shared::config::ToastConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Error => "alert-circle",
            _ => "check-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub fading: bool,
}

/// Visible toasts in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            fading: false,
        });
        id
    }

    pub fn start_fade(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast area state shared through context
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<ToastStack>,
    config: ToastConfig,
}

impl ToastService {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
            config,
        }
    }

    /// Show a toast; `duration_ms` overrides the configured default
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: Option<u32>) {
        let message = message.into();
        match kind {
            ToastKind::Error => log::error!("toast: {}", message),
            ToastKind::Warning => log::warn!("toast: {}", message),
            _ => log::info!("toast: {}", message),
        }

        let mut id = 0;
        self.stack.update(|stack| id = stack.push(message, kind));

        let stack = self.stack;
        let duration = duration_ms.unwrap_or(self.config.duration_ms);
        let fade = self.config.fade_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            stack.update(|s| s.start_fade(id));
            gloo_timers::future::TimeoutFuture::new(fade).await;
            stack.update(|s| s.remove(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|s| s.remove(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.with(|s| s.toasts().to_vec())
    }
}

/// Fixed notification area
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div id="toast-container" class="toast-container">
            {move || {
                service
                    .toasts()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = if toast.fading {
                            format!("toast {} toast--fading", toast.kind.css_class())
                        } else {
                            format!("toast {}", toast.kind.css_class())
                        };
                        view! {
                            <div class=class role="status" on:click=move |_| service.dismiss(id)>
                                {icon(toast.kind.icon_name())}
                                <span>{toast.message}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_independently() {
        let mut stack = ToastStack::default();
        let first = stack.push("one", ToastKind::Info);
        let second = stack.push("two", ToastKind::Error);
        assert_ne!(first, second);
        assert_eq!(stack.toasts().len(), 2);

        stack.start_fade(first);
        assert!(stack.toasts()[0].fading);
        assert!(!stack.toasts()[1].fading);

        stack.remove(first);
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "two");

        // late timers of removed toasts are harmless
        stack.start_fade(first);
        stack.remove(first);
        assert_eq!(stack.toasts().len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = ToastStack::default();
        let a = stack.push("a", ToastKind::Success);
        stack.remove(a);
        let b = stack.push("b", ToastKind::Success);
        assert!(b > a);
    }

    #[test]
    fn test_kind_presentation() {
        assert_eq!(ToastKind::Warning.css_class(), "warning");
        assert_eq!(ToastKind::Error.icon_name(), "alert-circle");
        assert_eq!(ToastKind::Info.icon_name(), "check-circle");
    }
}
