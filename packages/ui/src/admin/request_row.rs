//! Table row for a single pending request.

use connect_core::{Outcome, PendingRequest, RequestKey};
use dioxus::prelude::*;

/// Props for RequestRow component.
#[derive(Props, Clone, PartialEq)]
pub struct RequestRowProps {
    /// The request to display.
    pub request: PendingRequest,
    /// A decision for this row is in flight.
    #[props(default = false)]
    pub busy: bool,
    /// Callback when approve or reject is clicked.
    pub on_decide: EventHandler<(RequestKey, Outcome)>,
}

#[component]
pub fn RequestRow(props: RequestRowProps) -> Element {
    let request = props.request.clone();
    let key = request.key.to_string();
    let group_id = request.key.group_id().map(str::to_string);
    let user_id = request.key.user_id().map(str::to_string);
    let requester = request.requester.clone().unwrap_or_default();
    let submitted = request.submitted_display().unwrap_or_default();

    let key_for_approve = request.key.clone();
    let key_for_reject = request.key.clone();

    rsx! {
        tr {
            class: "data-row",
            "data-request-id": "{key}",
            "data-group-id": group_id,
            "data-user-id": user_id,

            td { class: "request-cell",
                span { class: "request-title", "{request.title}" }
                if let Some(ref desc) = request.description {
                    span { class: "request-desc", "{desc}" }
                }
            }
            td { class: "text-muted", "{requester}" }
            td { class: "text-muted tabular-nums", "{submitted}" }
            td { class: "text-right",
                button {
                    class: "btn btn-small btn-approve",
                    "data-action": "approve",
                    "data-id": "{key}",
                    disabled: props.busy,
                    onclick: move |_| props.on_decide.call((key_for_approve.clone(), Outcome::Approve)),
                    "Approve"
                }
                button {
                    class: "btn btn-small btn-reject",
                    "data-action": "reject",
                    "data-id": "{key}",
                    disabled: props.busy,
                    onclick: move |_| props.on_decide.call((key_for_reject.clone(), Outcome::Reject)),
                    "Reject"
                }
            }
        }
    }
}
