//! In-process CloudFront backend.
//!
//! Backs the test-suite and the `--demo` mode. Clones share state, so a test
//! can keep a handle while the TUI owns another.

use super::model::{Distribution, Invalidation, InvalidationRequest};
use super::reference::CallerReferenceGenerator;
use super::CloudFrontApi;
use crate::error::{Error, RemoteOperation, Result};
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    distributions: Vec<Distribution>,
    /// Invalidations per distribution, newest first
    invalidations: HashMap<String, Vec<Invalidation>>,
    requests: Vec<(String, InvalidationRequest)>,
    fail_next: HashMap<RemoteOperation, String>,
    next_id: u64,
}

/// Shared, cloneable in-memory backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCloudFront {
    state: Arc<Mutex<State>>,
    references: Arc<CallerReferenceGenerator>,
}

impl InMemoryCloudFront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend seeded with a few distributions and invalidations.
    pub fn demo() -> Self {
        let backend = Self::new();
        backend.add_distribution(Distribution::new(
            "E1DEMO2EXAMPLE",
            ["www.example.com", "example.com"],
        ));
        backend.add_distribution(Distribution::new("E2DEMOASSETS", ["assets.example.com"]));
        backend.add_distribution(Distribution::new("E3DEMONOALIAS", Vec::<String>::new()));

        let now = Utc::now();
        backend.add_invalidation(
            "E1DEMO2EXAMPLE",
            Invalidation::new("I1DEMOCOMPLETED", now - Duration::days(2), "Completed"),
        );
        backend.add_invalidation(
            "E1DEMO2EXAMPLE",
            Invalidation::new("I2DEMOPENDING", now - Duration::minutes(3), "InProgress"),
        );
        backend
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_distribution(&self, distribution: Distribution) {
        self.lock().distributions.push(distribution);
    }

    /// Record an existing invalidation; it becomes the newest entry.
    pub fn add_invalidation(&self, distribution_id: &str, invalidation: Invalidation) {
        self.lock()
            .invalidations
            .entry(distribution_id.to_string())
            .or_default()
            .insert(0, invalidation);
    }

    /// Set the status of an invalidation, e.g. to mark it `Completed`.
    pub fn set_status(&self, distribution_id: &str, invalidation_id: &str, status: &str) {
        let mut state = self.lock();
        if let Some(inv) = state
            .invalidations
            .get_mut(distribution_id)
            .and_then(|list| list.iter_mut().find(|inv| inv.id == invalidation_id))
        {
            inv.status = status.to_string();
        }
    }

    /// Make the next call of `operation` fail with `message`.
    pub fn fail_next(&self, operation: RemoteOperation, message: impl Into<String>) {
        self.lock()
            .fail_next
            .insert(operation, message.into());
    }

    /// Every create request received so far, as (distribution id, request).
    pub fn requests(&self) -> Vec<(String, InvalidationRequest)> {
        self.lock().requests.clone()
    }

    fn take_failure(state: &mut State, operation: RemoteOperation) -> Result<()> {
        match state.fail_next.remove(&operation) {
            Some(message) => Err(Error::remote(operation, message)),
            None => Ok(()),
        }
    }

    fn require_distribution(
        state: &State,
        operation: RemoteOperation,
        distribution_id: &str,
    ) -> Result<()> {
        if state.distributions.iter().any(|d| d.id == distribution_id) {
            Ok(())
        } else {
            Err(Error::remote(
                operation,
                format!("NoSuchDistribution: {distribution_id}"),
            ))
        }
    }
}

impl CloudFrontApi for InMemoryCloudFront {
    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        let mut state = self.lock();
        Self::take_failure(&mut state, RemoteOperation::ListDistributions)?;
        Ok(state.distributions.clone())
    }

    fn list_invalidations(&self, distribution_id: &str) -> Result<Vec<Invalidation>> {
        let op = RemoteOperation::ListInvalidations;
        let mut state = self.lock();
        Self::take_failure(&mut state, op)?;
        Self::require_distribution(&state, op, distribution_id)?;
        Ok(state
            .invalidations
            .get(distribution_id)
            .cloned()
            .unwrap_or_default())
    }

    fn create_invalidation(
        &self,
        distribution_id: &str,
        path_pattern: &str,
    ) -> Result<Invalidation> {
        let op = RemoteOperation::CreateInvalidation;
        let request = InvalidationRequest {
            path_pattern: path_pattern.to_string(),
            caller_reference: self.references.next(),
        };

        let mut state = self.lock();
        state
            .requests
            .push((distribution_id.to_string(), request.clone()));
        Self::take_failure(&mut state, op)?;
        Self::require_distribution(&state, op, distribution_id)?;

        if !path_pattern.starts_with('/') {
            return Err(Error::remote(
                op,
                format!("InvalidArgument: path '{path_pattern}' must begin with '/'"),
            ));
        }

        state.next_id += 1;
        let invalidation = Invalidation::new(
            format!("I{:012}", state.next_id),
            Utc::now(),
            "InProgress",
        );
        state
            .invalidations
            .entry(distribution_id.to_string())
            .or_default()
            .insert(0, invalidation.clone());

        tracing::debug!(
            distribution_id,
            caller_reference = %request.caller_reference,
            "In-memory invalidation created"
        );
        Ok(invalidation)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> InMemoryCloudFront {
        let backend = InMemoryCloudFront::new();
        backend.add_distribution(Distribution::new("E1", ["a.com"]));
        backend
    }

    #[test]
    fn test_empty_invalidation_list_is_not_an_error() {
        let backend = backend();
        assert!(backend.list_invalidations("E1").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_distribution_fails() {
        let backend = backend();
        let err = backend.list_invalidations("NOPE").unwrap_err();
        assert!(err.to_string().contains("NoSuchDistribution"));
    }

    #[test]
    fn test_create_prepends_in_progress() {
        let backend = backend();
        backend.create_invalidation("E1", "/a").unwrap();
        let second = backend.create_invalidation("E1", "/b").unwrap();
        let listed = backend.list_invalidations("E1").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], second);
        assert_eq!(listed[0].status, "InProgress");
    }

    #[test]
    fn test_create_rejects_relative_path_but_records_request() {
        let backend = backend();
        assert!(backend.create_invalidation("E1", "").is_err());
        assert!(backend.list_invalidations("E1").unwrap().is_empty());
        assert_eq!(backend.requests().len(), 1);
    }

    #[test]
    fn test_fail_next_is_one_shot() {
        let backend = backend();
        backend.fail_next(RemoteOperation::ListDistributions, "Throttling");
        assert!(backend.list_distributions().is_err());
        assert_eq!(backend.list_distributions().unwrap().len(), 1);
    }

    #[test]
    fn test_set_status() {
        let backend = backend();
        let created = backend.create_invalidation("E1", "/*").unwrap();
        backend.set_status("E1", &created.id, "Completed");
        assert_eq!(backend.list_invalidations("E1").unwrap()[0].status, "Completed");
    }

    #[test]
    fn test_demo_backend() {
        let backend = InMemoryCloudFront::demo();
        assert_eq!(backend.list_distributions().unwrap().len(), 3);
        let invalidations = backend.list_invalidations("E1DEMO2EXAMPLE").unwrap();
        assert_eq!(invalidations[0].id, "I2DEMOPENDING");
    }
}
