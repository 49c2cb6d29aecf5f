//! `localStorage`-backed session store.
//!
//! Uses the same keys as the rest of the site (`token`, `role`, `userId`) so
//! a session created on any page is visible here.

use connect_core::{Role, Session, SessionStore};
use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USER_ID_KEY: &str = "userId";

pub struct BrowserSessionStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()?
            .parse::<Role>()
            .ok()?;
        let user_id = storage
            .get_item(USER_ID_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Some(Session::new(token, role, user_id))
    }

    fn save(&self, session: &Session) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        let entries = [
            (TOKEN_KEY, session.token.as_str()),
            (ROLE_KEY, session.role.as_str()),
            (USER_ID_KEY, session.user_id.as_str()),
        ];
        for (key, value) in entries {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "failed to write session to localStorage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            for key in [TOKEN_KEY, ROLE_KEY, USER_ID_KEY] {
                let _ = storage.remove_item(key);
            }
        }
    }
}
