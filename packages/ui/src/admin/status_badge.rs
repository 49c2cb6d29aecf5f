//! Queue badge shown next to each section heading.

use dioxus::prelude::*;

/// Badge summarising a queue: loading, failed, clear, or its pending count.
#[component]
pub fn QueueBadge(loading: bool, failed: bool, count: usize) -> Element {
    let (bg_class, text) = if loading {
        ("badge-pending", "Loading".to_string())
    } else if failed {
        ("badge-failed", "Unavailable".to_string())
    } else if count == 0 {
        ("badge-completed", "Clear".to_string())
    } else {
        ("badge-running", format!("{count} pending"))
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {text}
        }
    }
}
