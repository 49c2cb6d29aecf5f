//! Landing page for non-admin members.

use dioxus::prelude::*;

use crate::use_session;

#[component]
pub fn MemberDashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let role = session.current().map(|s| s.role.to_string());

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    if let Some(role) = role {
                        p { class: "page-description", "Signed in as {role}" }
                    }
                }
            }
            button {
                class: "btn",
                onclick: move |_| {
                    session.sign_out();
                    nav.replace("/login");
                },
                "Sign out"
            }
        }
    }
}
