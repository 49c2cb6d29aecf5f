//! Identifiers addressing a single pending request.

use serde_json::Value;
use thiserror::Error;
use urlencoding::encode;

/// Identifier of one pending request within a category.
///
/// Most categories address a request by a single id. Group-join requests
/// have no id of their own and are addressed by the pair (group, user).
/// The two shapes never compare equal, even when their rendered text matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestKey {
    Single(String),
    Composite { group_id: String, user_id: String },
}

impl RequestKey {
    pub fn single(id: impl Into<String>) -> Self {
        Self::Single(id.into())
    }

    pub fn composite(group_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::Composite {
            group_id: group_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Path suffix used by mutation endpoints (`1` or `7/42`), with each
    /// segment percent-encoded.
    pub fn path(&self) -> String {
        match self {
            RequestKey::Single(id) => encode(id).into_owned(),
            RequestKey::Composite { group_id, user_id } => {
                format!("{}/{}", encode(group_id), encode(user_id))
            }
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            RequestKey::Single(_) => None,
            RequestKey::Composite { group_id, .. } => Some(group_id),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            RequestKey::Single(_) => None,
            RequestKey::Composite { user_id, .. } => Some(user_id),
        }
    }
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKey::Single(id) => write!(f, "{id}"),
            RequestKey::Composite { group_id, user_id } => write!(f, "{group_id}:{user_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("record has no identifier (expected one of: {0})")]
    Missing(String),

    #[error("record is not a JSON object")]
    NotAnObject,
}

/// Where a category's records keep their identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// First present field among the candidates.
    Single(&'static [&'static str]),
    /// Both fields are required.
    Composite {
        group: &'static str,
        user: &'static str,
    },
}

impl KeyShape {
    pub fn extract(&self, record: &Value) -> Result<RequestKey, KeyError> {
        if !record.is_object() {
            return Err(KeyError::NotAnObject);
        }

        match self {
            KeyShape::Single(candidates) => first_scalar(record, candidates)
                .map(RequestKey::Single)
                .ok_or_else(|| KeyError::Missing(candidates.join(", "))),
            KeyShape::Composite { group, user } => {
                let group_id = scalar_field(record, group);
                let user_id = scalar_field(record, user);
                match (group_id, user_id) {
                    (Some(group_id), Some(user_id)) => {
                        Ok(RequestKey::Composite { group_id, user_id })
                    }
                    _ => Err(KeyError::Missing(format!("{group} and {user}"))),
                }
            }
        }
    }
}

/// Stringify a scalar JSON field. Empty strings, null, arrays and objects
/// count as absent.
pub(crate) fn scalar_field(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn first_scalar(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|field| scalar_field(record, field))
}
