//! Moderation queue operations: list pending records, post decisions.

use connect_core::{Category, Method, Outcome, PendingRequest, RequestKey};
use futures_util::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::server_message;
use crate::{ApiClient, ApiError, Transport};

/// Object keys a list may be wrapped in.
const LIST_ENVELOPES: [&str; 3] = ["data", "requests", "items"];

impl<T: Transport> ApiClient<T> {
    /// Fetch the pending records of one category, in server order.
    pub async fn load_pending(&self, category: Category) -> Result<Vec<PendingRequest>, ApiError> {
        let spec = category.spec();
        let body = self.send(Method::Get, spec.list_path, None).await?;
        let records = list_records(body)?;
        let requests = spec.project_all(&records)?;
        debug!(%category, count = requests.len(), "loaded pending requests");
        Ok(requests)
    }

    /// Load several categories concurrently.
    ///
    /// Waits for all of them; each result is independent, so one failing
    /// category does not hold back the rest. Results come back in the order
    /// the categories were given.
    pub async fn load_all(
        &self,
        categories: &[Category],
    ) -> Vec<(Category, Result<Vec<PendingRequest>, ApiError>)> {
        let loads = categories.iter().map(|&category| async move {
            let result = self.load_pending(category).await;
            if let Err(err) = &result {
                warn!(%category, error = %err, "failed to load pending requests");
            }
            (category, result)
        });
        join_all(loads).await
    }

    /// Post an approve/reject decision for one request.
    ///
    /// Returns the server's confirmation message, if it sent one.
    pub async fn decide(
        &self,
        category: Category,
        key: &RequestKey,
        outcome: Outcome,
    ) -> Result<Option<String>, ApiError> {
        let mutation = category.spec().mutation(key, outcome);
        let body = self
            .send(mutation.method, &mutation.path, mutation.body)
            .await
            .inspect_err(|err| warn!(%category, %key, ?outcome, error = %err, "decision failed"))?;
        info!(%category, %key, ?outcome, "decision recorded");
        Ok(server_message(&body))
    }
}

fn list_records(body: Value) -> Result<Vec<Value>, ApiError> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => LIST_ENVELOPES
            .iter()
            .find_map(|field| match map.remove(*field) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .ok_or_else(|| {
                ApiError::MalformedResponse("expected a list of pending records".to_string())
            }),
        other => Err(ApiError::MalformedResponse(format!(
            "expected a list of pending records, got {other}"
        ))),
    }
}
