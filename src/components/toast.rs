//! Transient notification sink. Playback success/failure surfaces here;
//! callers never await a result just to show feedback.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::Icon;

const TOAST_LIMIT: usize = 4;
#[cfg(target_arch = "wasm32")]
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Keep the stack bounded; the oldest entries give way.
fn push_bounded(list: &mut Vec<Toast>, toast: Toast, limit: usize) {
    list.push(toast);
    let overflow = list.len().saturating_sub(limit);
    if overflow > 0 {
        list.drain(..overflow);
    }
}

#[derive(Clone, Copy)]
pub struct ToastController {
    toasts: Signal<Vec<Toast>>,
}

impl ToastController {
    pub fn new(toasts: Signal<Vec<Toast>>) -> Self {
        Self { toasts }
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        let id = toast.id;
        push_bounded(&mut *self.toasts.write(), toast, TOAST_LIMIT);

        #[cfg(target_arch = "wasm32")]
        {
            let mut controller = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                controller.dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> Element {
    let controller = use_context::<ToastController>();
    let toasts = controller.snapshot();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut controller = use_context::<ToastController>();
    let error = toast.kind == ToastKind::Error;
    let id = toast.id;

    rsx! {
        div {
            class: if error { "toast toast-error" } else { "toast toast-success" },
            onclick: move |_| controller.dismiss(id),
            Icon {
                name: if error { "alert".to_string() } else { "music".to_string() },
                class: "icon-16".to_string(),
            }
            span { class: "toast-message", "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            kind: ToastKind::Success,
            message: message.to_string(),
        }
    }

    #[test]
    fn push_bounded_drops_oldest_beyond_limit() {
        let mut list = Vec::new();
        for i in 0..5 {
            push_bounded(&mut list, toast(&format!("t{i}")), 3);
        }
        let messages: Vec<&str> = list.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["t2", "t3", "t4"]);
    }
}
