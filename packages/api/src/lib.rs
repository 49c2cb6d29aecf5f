//! REST client for the Alumni Connect backend.
//!
//! This crate wraps the admin endpoints the moderation pages use:
//! - Listing pending records per category
//! - Posting approve/reject decisions
//! - Signing in
//!
//! All I/O goes through the [`Transport`] trait so the request/response
//! handling can be exercised without a network.

mod client;
mod config;
mod error;
mod moderation;
mod transport;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{
    ApiError, GENERIC_FAILURE, MALFORMED_RESPONSE, SESSION_EXPIRED, TRANSPORT_FAILURE,
};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

// Re-export core types for convenience
pub use connect_core::{
    Category, Notification, Outcome, PendingRequest, QueueView, RequestKey, Role, Session,
};
