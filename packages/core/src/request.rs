//! Pending request records as shown in a moderation queue.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::RequestKey;
use crate::key::first_scalar;

/// A record awaiting an approve/reject decision.
///
/// Display fields hold raw, unescaped text exactly as the server sent it.
/// Escaping happens once, at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub key: RequestKey,
    pub title: String,
    pub description: Option<String>,
    pub requester: Option<String>,
    pub submitted_at: Option<String>,
}

impl PendingRequest {
    pub fn new(key: RequestKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            description: None,
            requester: None,
            submitted_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    pub fn with_submitted_at(mut self, submitted_at: impl Into<String>) -> Self {
        self.submitted_at = Some(submitted_at.into());
        self
    }

    /// Submission time formatted for the table, or the raw value when it is
    /// not a timestamp we recognise.
    pub fn submitted_display(&self) -> Option<String> {
        self.submitted_at.as_deref().map(format_timestamp)
    }
}

/// Candidate JSON fields for each display column, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProjection {
    pub title: &'static [&'static str],
    pub description: &'static [&'static str],
    pub requester: &'static [&'static str],
    pub submitted_at: &'static [&'static str],
}

impl FieldProjection {
    pub fn project(&self, key: RequestKey, record: &Value) -> PendingRequest {
        PendingRequest {
            key,
            title: first_scalar(record, self.title).unwrap_or_else(|| "Untitled".to_string()),
            description: first_scalar(record, self.description),
            requester: first_scalar(record, self.requester),
            submitted_at: first_scalar(record, self.submitted_at),
        }
    }
}

fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format(DISPLAY).to_string();
    }
    // SQL-style timestamps, with or without fractional seconds
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, pattern) {
            return ts.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
