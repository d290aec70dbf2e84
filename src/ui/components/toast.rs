use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

impl ToastKind {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
        }
    }
}

/// A queued notification. `id` doubles as the render key, so each card keeps
/// its own dismissal timer when older cards leave the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Appends a message, dropping the oldest once the queue is full.
pub fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn dismiss(entries: &mut Vec<ToastMessage>, id: &str) {
    entries.retain(|toast| toast.id != id);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    tracing::debug!(id = %message.id, kind = ?message.kind, "showing toast");
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in messages {
                    ToastItem { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastItem(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let mut toasts = toasts;
    let timer_id = message.id.clone();
    use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            tracing::trace!(%id, "toast expired");
            toasts.with_mut(|items| dismiss(items, &id));
        }
    });

    let (tone, icon) = message.kind.style();
    let click_id = message.id.clone();

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {tone}",
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| toasts.with_mut(|items| dismiss(items, &click_id)),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str) -> ToastMessage {
        ToastMessage::new(ToastKind::Info, text)
    }

    #[test]
    fn test_queue_drops_oldest_when_full() {
        let mut entries = Vec::new();
        for n in 0..7 {
            enqueue(&mut entries, info(&format!("message {n}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].text, "message 2");
        assert_eq!(entries[4].text, "message 6");
    }

    #[test]
    fn test_expiring_oldest_keeps_survivor_identity() {
        let first = info("first");
        let second = info("second");
        let survivor_id = second.id.clone();
        let mut entries = vec![first.clone(), second];

        dismiss(&mut entries, &first.id);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, survivor_id);
        assert_ne!(entries[0].id, first.id);
    }

    #[test]
    fn test_dismiss_ignores_unknown_ids() {
        let mut entries = vec![info("only")];
        dismiss(&mut entries, "toast-unknown");
        assert_eq!(entries.len(), 1);
    }
}
