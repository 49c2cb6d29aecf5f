//! Moderation categories and the configuration each one runs with.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::{FieldProjection, KeyError, KeyShape, PendingRequest, RequestKey};

/// A kind of record that goes through admin approval.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Verification,
    GroupCreation,
    GroupJoin,
    Jobs,
    Events,
    Campaigns,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Verification,
        Category::GroupCreation,
        Category::GroupJoin,
        Category::Jobs,
        Category::Events,
        Category::Campaigns,
    ];

    /// Requests raised by members about their account or groups.
    pub const REQUESTS: [Category; 3] = [
        Category::Verification,
        Category::GroupCreation,
        Category::GroupJoin,
    ];

    /// Posted content waiting to be published.
    pub const CONTENT: [Category; 3] = [Category::Jobs, Category::Events, Category::Campaigns];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Verification => "verification",
            Category::GroupCreation => "group-creation",
            Category::GroupJoin => "group-join",
            Category::Jobs => "jobs",
            Category::Events => "events",
            Category::Campaigns => "campaigns",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Verification => "Verification Requests",
            Category::GroupCreation => "Group Creation Requests",
            Category::GroupJoin => "Group Join Requests",
            Category::Jobs => "Pending Jobs",
            Category::Events => "Pending Events",
            Category::Campaigns => "Pending Campaigns",
        }
    }

    pub fn spec(&self) -> QueueSpec {
        match self {
            Category::Verification => QueueSpec {
                category: *self,
                list_path: "/admin/verification-requests",
                key: KeyShape::Single(&["request_id", "id"]),
                route: MutateRoute::Status {
                    base: "/admin/verification-requests",
                    vocabulary: StatusVocabulary::PastTense,
                },
                fields: FieldProjection {
                    title: &["name", "full_name", "email"],
                    description: &["role", "document_type", "message"],
                    requester: &["email", "user_name"],
                    submitted_at: &["created_at", "requested_at"],
                },
                empty_message: "No pending verification requests",
            },
            Category::GroupCreation => QueueSpec {
                category: *self,
                list_path: "/admin/group-creation-requests",
                key: KeyShape::Single(&["request_id", "id"]),
                route: MutateRoute::Status {
                    base: "/admin/group-creation-requests",
                    vocabulary: StatusVocabulary::Imperative,
                },
                fields: FieldProjection {
                    title: &["name", "group_name"],
                    description: &["description"],
                    requester: &["requester_name", "created_by_name", "user_name"],
                    submitted_at: &["created_at", "requested_at"],
                },
                empty_message: "No pending group creation requests",
            },
            Category::GroupJoin => QueueSpec {
                category: *self,
                list_path: "/admin/group-join-requests",
                key: KeyShape::Composite {
                    group: "group_id",
                    user: "user_id",
                },
                route: MutateRoute::Status {
                    base: "/admin/group-join-requests",
                    vocabulary: StatusVocabulary::PastTense,
                },
                fields: FieldProjection {
                    title: &["group_name", "name"],
                    description: &["message", "reason"],
                    requester: &["user_name", "name", "email"],
                    submitted_at: &["requested_at", "created_at"],
                },
                empty_message: "No pending group join requests",
            },
            Category::Jobs => content_spec(*self, "/admin/pending-jobs", &["id", "job_id"], "job"),
            Category::Events => {
                content_spec(*self, "/admin/pending-events", &["id", "event_id"], "event")
            }
            Category::Campaigns => content_spec(
                *self,
                "/admin/pending-campaigns",
                &["id", "campaign_id"],
                "campaign",
            ),
        }
    }
}

fn content_spec(
    category: Category,
    list_path: &'static str,
    key: &'static [&'static str],
    content_type: &'static str,
) -> QueueSpec {
    QueueSpec {
        category,
        list_path,
        key: KeyShape::Single(key),
        route: MutateRoute::Action { content_type },
        fields: FieldProjection {
            title: &["title", "name"],
            description: &["description"],
            requester: &["posted_by_name", "creator_name", "user_name"],
            submitted_at: &["created_at"],
        },
        empty_message: match category {
            Category::Events => "No pending events",
            Category::Campaigns => "No pending campaigns",
            _ => "No pending jobs",
        },
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown moderation category: {0}")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// An admin's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Approve,
    Reject,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Approve => "Approve",
            Outcome::Reject => "Reject",
        }
    }

    /// Shown when the server confirms without a message of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Outcome::Approve => "Request approved",
            Outcome::Reject => "Request rejected",
        }
    }
}

/// How an endpoint spells the status it expects.
///
/// The backend is not consistent across endpoints, so each category carries
/// its own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVocabulary {
    /// `approved` / `rejected`
    PastTense,
    /// `approve` / `reject`
    Imperative,
}

impl StatusVocabulary {
    pub fn token(&self, outcome: Outcome) -> &'static str {
        match (self, outcome) {
            (StatusVocabulary::PastTense, Outcome::Approve) => "approved",
            (StatusVocabulary::PastTense, Outcome::Reject) => "rejected",
            (StatusVocabulary::Imperative, Outcome::Approve) => "approve",
            (StatusVocabulary::Imperative, Outcome::Reject) => "reject",
        }
    }
}

/// Shape of the status-mutation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateRoute {
    /// `PUT {base}/{key}` with body `{"status": token}`.
    Status {
        base: &'static str,
        vocabulary: StatusVocabulary,
    },
    /// `POST /admin/{approve|reject}/{content_type}/{id}` with no body.
    Action { content_type: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Put => write!(f, "PUT"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully resolved status-transition call.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Everything that distinguishes one moderation queue from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSpec {
    pub category: Category,
    pub list_path: &'static str,
    pub key: KeyShape,
    pub route: MutateRoute,
    pub fields: FieldProjection,
    pub empty_message: &'static str,
}

impl QueueSpec {
    pub fn mutation(&self, key: &RequestKey, outcome: Outcome) -> MutationRequest {
        match self.route {
            MutateRoute::Status { base, vocabulary } => MutationRequest {
                method: Method::Put,
                path: format!("{base}/{}", key.path()),
                body: Some(json!({ "status": vocabulary.token(outcome) })),
            },
            MutateRoute::Action { content_type } => {
                let action = match outcome {
                    Outcome::Approve => "approve",
                    Outcome::Reject => "reject",
                };
                MutationRequest {
                    method: Method::Post,
                    path: format!("/admin/{action}/{content_type}/{}", key.path()),
                    body: None,
                }
            }
        }
    }

    /// Turn one raw record into a displayable request.
    pub fn project(&self, record: &Value) -> Result<PendingRequest, KeyError> {
        let key = self.key.extract(record)?;
        Ok(self.fields.project(key, record))
    }

    /// Project every record, failing if any one of them cannot be addressed.
    pub fn project_all(&self, records: &[Value]) -> Result<Vec<PendingRequest>, KeyError> {
        records.iter().map(|record| self.project(record)).collect()
    }
}
