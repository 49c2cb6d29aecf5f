//! Core domain types for the Alumni Connect admin client.
//!
//! This crate contains shared types used across all packages:
//! - Categories and the per-category queue configuration
//! - Pending requests and their identifiers
//! - The moderation queue view state
//! - Sessions, roles and notifications
//!
//! Nothing here performs I/O.

mod category;
mod key;
mod notification;
mod request;
mod session;
mod view;

pub use category::{
    Category, Method, MutateRoute, MutationRequest, Outcome, ParseCategoryError, QueueSpec,
    StatusVocabulary,
};
pub use key::{KeyError, KeyShape, RequestKey};
pub use notification::{Level, Notification, NotificationId};
pub use request::{FieldProjection, PendingRequest};
pub use session::{
    Access, MemorySessionStore, ParseRoleError, Role, Session, SessionStore, guard,
};
pub use view::{LoadState, QueueView};
