//! Table listing one category's pending requests.

use connect_core::{LoadState, Outcome, QueueView, RequestKey};
use dioxus::prelude::*;

use super::RequestRow;

/// Props for QueueTable component.
#[derive(Props, Clone, PartialEq)]
pub struct QueueTableProps {
    pub view: QueueView,
    pub on_decide: EventHandler<(RequestKey, Outcome)>,
}

/// Renders one row per pending request, or a single placeholder row when
/// the queue is loading, failed, or empty.
#[component]
pub fn QueueTable(props: QueueTableProps) -> Element {
    let spec = props.view.spec();
    let view = &props.view;

    let body = match view.state() {
        LoadState::Loading => rsx! {
            tr { class: "loading-row",
                td { colspan: "4", class: "loading", "Loading..." }
            }
        },
        LoadState::Failed(message) => rsx! {
            tr { class: "error-row",
                td { colspan: "4", class: "error", "{message}" }
            }
        },
        LoadState::Ready(rows) if rows.is_empty() => rsx! {
            tr { class: "empty-state",
                td { colspan: "4", "{spec.empty_message}" }
            }
        },
        LoadState::Ready(rows) => rsx! {
            for request in rows.iter() {
                RequestRow {
                    key: "{request.key}",
                    request: request.clone(),
                    busy: view.is_in_flight(&request.key),
                    on_decide: props.on_decide,
                }
            }
        },
    };

    rsx! {
        div { class: "table-container",
            table { class: "data-table", "data-category": "{spec.category}",
                thead {
                    tr {
                        th { "Request" }
                        th { "Requested by" }
                        th { "Submitted" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody { {body} }
            }
        }
    }
}
