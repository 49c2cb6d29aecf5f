//! Role guard for protected routes.

use connect_core::{Access, Role, guard};
use dioxus::prelude::*;

use crate::use_session;

/// Renders its children only for a session whose role is in `allowed`.
///
/// Without a session it redirects to the login view; with the wrong role it
/// sends the user to their own home page. Re-evaluated whenever the session
/// changes, so an expired session redirects from wherever the user is.
#[component]
pub fn RequireRole(allowed: Vec<Role>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let effect_session = session.clone();
    let effect_allowed = allowed.clone();
    use_effect(move || {
        let access = guard(effect_session.current().as_ref(), &effect_allowed);
        if let Some(path) = access.redirect_path() {
            nav.replace(path);
        }
    });

    match guard(session.current().as_ref(), &allowed) {
        Access::Granted(_) => children,
        _ => rsx! {
            div { class: "loading", "Redirecting..." }
        },
    }
}
