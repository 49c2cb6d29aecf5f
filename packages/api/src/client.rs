//! Authenticated JSON client for the Alumni Connect REST API.

use std::rc::Rc;

use connect_core::{Method, Role, Session, SessionStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ApiConfig, ApiError, HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Client shared by every page.
///
/// Every authenticated call carries the bearer token from the session store.
/// A 401 clears that store before the error is returned, so whichever page
/// triggered it, the session is gone.
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
    sessions: Rc<dyn SessionStore>,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: ApiConfig, sessions: Rc<dyn SessionStore>) -> Self {
        Self::with_transport(config, ReqwestTransport::new(), sessions)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T, sessions: Rc<dyn SessionStore>) -> Self {
        Self {
            config,
            transport,
            sessions,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// Send an authenticated request and return its JSON body.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let bearer = self.sessions.load().map(|session| session.token);
        self.dispatch(method, path, bearer, body, true).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<Value, ApiError> {
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            bearer,
            body,
        };
        debug!(%method, url = %request.url, "api request");

        let response = self.transport.execute(request).await.inspect_err(|err| {
            warn!(%method, path, error = %err, "api request failed to complete");
        })?;
        self.interpret(response, authenticated)
    }

    fn interpret(&self, response: HttpResponse, authenticated: bool) -> Result<Value, ApiError> {
        if response.status == 401 && authenticated {
            warn!("api returned 401, clearing session");
            self.sessions.clear();
            return Err(ApiError::Unauthorized);
        }

        let parsed = parse_body(&response.body);
        if !response.is_success() {
            let message = parsed.ok().as_ref().and_then(server_message);
            return Err(ApiError::Rejected {
                status: response.status,
                message,
            });
        }
        parsed
    }

    /// Exchange credentials for a session and persist it.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::to_value(LoginRequest { email, password })
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let response = self
            .dispatch(Method::Post, "/auth/login", None, Some(body), false)
            .await?;

        let login: LoginResponse = serde_json::from_value(response)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let role = login
            .user
            .role
            .parse::<Role>()
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let user_id = match login.user.id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            other => {
                return Err(ApiError::MalformedResponse(format!(
                    "unexpected user id: {other}"
                )));
            }
        };

        let session = Session::new(login.token, role, user_id);
        self.sessions.save(&session);
        debug!(role = %session.role, "signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        self.sessions.clear();
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Deserialize)]
struct LoginUser {
    id: Value,
    role: String,
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// The human-readable `message` field most responses carry.
pub(crate) fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
