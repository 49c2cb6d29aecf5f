//! Card wrapping a queue table with its heading and refresh control.

use connect_core::{LoadState, Outcome, QueueView, RequestKey};
use dioxus::prelude::*;

use super::{QueueBadge, QueueTable};

/// Props for QueueSection component.
#[derive(Props, Clone, PartialEq)]
pub struct QueueSectionProps {
    pub view: QueueView,
    pub on_decide: EventHandler<(RequestKey, Outcome)>,
    pub on_refresh: EventHandler<()>,
}

#[component]
pub fn QueueSection(props: QueueSectionProps) -> Element {
    let category = props.view.category();
    let label = category.label();
    let loading = props.view.is_loading();
    let failed = matches!(props.view.state(), LoadState::Failed(_));
    let count = props.view.len();

    rsx! {
        section { class: "card", id: "{category}",
            div { class: "card-header",
                h2 { class: "card-title", "{label}" }
                QueueBadge { loading, failed, count }
                button {
                    class: "btn btn-small btn-refresh",
                    disabled: loading,
                    onclick: move |_| props.on_refresh.call(()),
                    "Refresh"
                }
            }
            QueueTable { view: props.view.clone(), on_decide: props.on_decide }
        }
    }
}
