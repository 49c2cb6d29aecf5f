//! Signed-in user context and the role guard.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Alumni,
    Student,
    Faculty,
    Employer,
    Institute,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Alumni,
        Role::Student,
        Role::Faculty,
        Role::Employer,
        Role::Institute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Alumni => "alumni",
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Employer => "employer",
            Role::Institute => "institute",
        }
    }

    /// Where a user of this role lands after signing in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/moderation",
            _ => "/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Credentials of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role,
            user_id: user_id.into(),
        }
    }
}

/// Persistence for the current session.
///
/// The browser implementation writes to `localStorage`; tests and server-side
/// rendering use [`MemorySessionStore`].
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            current: RefCell::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.current.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.current.borrow_mut().take();
    }
}

/// Result of checking a session against the roles a page admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    /// No session: send the user to the login view.
    Unauthenticated,
    /// Signed in with a role the page does not admit.
    Forbidden { role: Role },
}

impl Access {
    /// Path to redirect to, if access was not granted.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Access::Granted(_) => None,
            Access::Unauthenticated => Some("/login"),
            Access::Forbidden { role } => Some(role.home_path()),
        }
    }
}

pub fn guard(session: Option<&Session>, allowed: &[Role]) -> Access {
    match session {
        None => Access::Unauthenticated,
        Some(session) if allowed.contains(&session.role) => Access::Granted(session.clone()),
        Some(session) => Access::Forbidden { role: session.role },
    }
}
