//! Toast notifications.

use std::time::Duration;

use connect_core::{Notification, NotificationId};
use dioxus::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Notification>>,
}

impl Toasts {
    pub fn push(&self, notification: Notification) {
        let mut items = self.items;
        items.write().push(notification);
    }

    pub fn dismiss(&self, id: NotificationId) {
        let mut items = self.items;
        items.write().retain(|n| n.id != id);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides [`Toasts`] and renders the stack above its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Notification>::new);
    use_context_provider(|| Toasts { items });

    rsx! {
        {children}
        div { class: "toast-stack",
            for notification in items().into_iter() {
                ToastItem { key: "{notification.id}", notification }
            }
        }
    }
}

#[component]
fn ToastItem(notification: Notification) -> Element {
    let toasts = use_toasts();
    let id = notification.id;
    let level = notification.level.as_str();

    // Auto-dismiss
    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    rsx! {
        div {
            class: "toast toast-{level}",
            role: "status",
            onclick: move |_| toasts.dismiss(id),
            "{notification.message}"
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
