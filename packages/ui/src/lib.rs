//! Shared UI for the admin client: session context, toasts, route guard and
//! the moderation components.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod dashboard;
mod guard;
mod login;
mod session;
mod toast;

#[cfg(target_arch = "wasm32")]
mod browser_store;

pub mod admin;

pub use dashboard::MemberDashboard;
pub use guard::RequireRole;
pub use login::LoginPage;
pub use session::{SessionHandle, SessionProvider, use_api, use_session, use_session_provider};
pub use toast::{ToastProvider, Toasts, use_toasts};
