#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::{ApiClient, ApiConfig, ApiError, HttpRequest, HttpResponse, Transport};
use connect_core::{MemorySessionStore, Method, Role, Session, SessionStore};

pub const BASE_URL: &str = "http://api.test/api";

enum Reply {
    Respond(HttpResponse),
    Offline,
}

/// In-process stand-in for the backend: canned replies per route, and a log
/// of everything sent.
#[derive(Clone, Default)]
pub struct FakeTransport {
    routes: Rc<RefCell<HashMap<(Method, String), Reply>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            (method, path.to_string()),
            Reply::Respond(HttpResponse::new(status, body)),
        );
    }

    pub fn offline(&self, method: Method, path: &str) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Reply::Offline);
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        let url = format!("{BASE_URL}{path}");
        self.sent()
            .into_iter()
            .filter(|request| request.method == method && request.url == url)
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        match self.routes.borrow().get(&(request.method, path)) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Offline) => Err(ApiError::Transport("connection refused".to_string())),
            None => Ok(HttpResponse::new(404, r#"{"message":"Not found"}"#)),
        }
    }
}

pub fn admin_session() -> Session {
    Session::new("admin-token", Role::Admin, "1")
}

pub fn client_with(
    transport: &FakeTransport,
    session: Option<Session>,
) -> (ApiClient<FakeTransport>, Rc<MemorySessionStore>) {
    let store = Rc::new(match session {
        Some(session) => MemorySessionStore::with_session(session),
        None => MemorySessionStore::new(),
    });
    let sessions: Rc<dyn SessionStore> = store.clone();
    let config = ApiConfig::new(BASE_URL).expect("valid test base url");
    (
        ApiClient::with_transport(config, transport.clone(), sessions),
        store,
    )
}
