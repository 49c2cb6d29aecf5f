//! Session context shared by every page.
//!
//! The session is read once from the store at startup and then kept in a
//! signal, so components re-render (and guards redirect) when it changes.

use std::rc::Rc;

use api::{ApiClient, ApiConfig};
use connect_core::{Session, SessionStore};
use dioxus::prelude::*;

#[derive(Clone)]
pub struct SessionHandle {
    current: Signal<Option<Session>>,
    store: Rc<dyn SessionStore>,
}

impl SessionHandle {
    /// The signed-in session. Subscribes the calling scope.
    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn sign_in(&self, session: Session) {
        self.store.save(&session);
        let mut current = self.current;
        current.set(Some(session));
    }

    pub fn sign_out(&self) {
        self.store.clear();
        let mut current = self.current;
        current.set(None);
    }

    /// Drop the session after the API answered 401.
    pub fn expire(&self) {
        tracing::info!("session expired, signing out");
        self.sign_out();
    }
}

/// Provides [`SessionHandle`] and the [`ApiClient`] to everything below it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(default_store);
    use_session_provider(store);

    children
}

/// Provide the session context from a given store.
///
/// The session is read from the store on the first render; the app is
/// client-rendered, so that render already sees the browser's session.
pub fn use_session_provider(store: Rc<dyn SessionStore>) -> SessionHandle {
    let current = use_signal({
        let store = store.clone();
        move || store.load()
    });

    let handle = use_context_provider(|| SessionHandle {
        current,
        store: store.clone(),
    });
    use_context_provider(|| {
        let config = ApiConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default API configuration");
            ApiConfig::default()
        });
        tracing::debug!(base_url = config.base_url(), "api client configured");
        ApiClient::new(config, store)
    });
    handle
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(crate::browser_store::BrowserSessionStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(connect_core::MemorySessionStore::new())
}
