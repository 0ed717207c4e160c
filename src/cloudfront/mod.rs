//! CloudFront gateway.
//!
//! The [`CloudFrontApi`] trait is the only seam between the TUI and AWS. Two
//! implementations are provided:
//! - [`SdkCloudFront`] - the live client built on `aws-sdk-cloudfront`
//! - [`InMemoryCloudFront`] - an in-process backend for tests and `--demo`
//!
//! All calls are synchronous; the live client blocks on a private runtime.

mod client;
mod console;
mod memory;
mod model;
mod reference;

pub use client::{SdkCloudFront, SdkClientConfig};
pub use console::{console_url, DEFAULT_CONSOLE_REGION};
pub use memory::InMemoryCloudFront;
pub use model::{
    distribution_entries, format_local_time, Distribution, DistributionEntry, Invalidation,
    InvalidationRequest, NO_ALIASES_LABEL,
};
pub use reference::{CallerReferenceGenerator, DEFAULT_CALLER_REFERENCE_PREFIX};

use crate::error::Result;

/// Trait for CloudFront backends.
///
/// Errors are surfaced to the caller, never retried.
///
/// # Example
///
/// ```
/// use cfinval::cloudfront::{CloudFrontApi, Distribution, InMemoryCloudFront};
///
/// let backend = InMemoryCloudFront::new();
/// backend.add_distribution(Distribution::new("E1", ["a.com"]));
/// let invalidation = backend.create_invalidation("E1", "/*").unwrap();
/// assert_eq!(backend.list_invalidations("E1").unwrap()[0].id, invalidation.id);
/// ```
pub trait CloudFrontApi {
    /// List distributions (first page only).
    fn list_distributions(&self) -> Result<Vec<Distribution>>;

    /// List invalidations for a distribution, newest first.
    ///
    /// A distribution without invalidations yields an empty vector.
    fn list_invalidations(&self, distribution_id: &str) -> Result<Vec<Invalidation>>;

    /// Create an invalidation for exactly one path pattern.
    ///
    /// A fresh caller reference is generated for every call. The pattern is
    /// passed through untouched; validation is left to the service.
    fn create_invalidation(&self, distribution_id: &str, path_pattern: &str)
        -> Result<Invalidation>;

    /// Short backend name for logs and the header.
    fn name(&self) -> &'static str;
}

impl<T: CloudFrontApi + ?Sized> CloudFrontApi for Box<T> {
    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        (**self).list_distributions()
    }

    fn list_invalidations(&self, distribution_id: &str) -> Result<Vec<Invalidation>> {
        (**self).list_invalidations(distribution_id)
    }

    fn create_invalidation(
        &self,
        distribution_id: &str,
        path_pattern: &str,
    ) -> Result<Invalidation> {
        (**self).create_invalidation(distribution_id, path_pattern)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
