//! Live CloudFront backend on top of `aws-sdk-cloudfront`.

use super::model::{Distribution, Invalidation, InvalidationRequest};
use super::reference::{CallerReferenceGenerator, DEFAULT_CALLER_REFERENCE_PREFIX};
use super::CloudFrontApi;
use crate::error::{Error, RemoteOperation, Result};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudfront::config::Region;
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::primitives::DateTime as SdkDateTime;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use aws_sdk_cloudfront::Client;
use chrono::{DateTime, Utc};
use tokio::runtime::Runtime;

/// Settings for building the live client.
#[derive(Debug, Clone)]
pub struct SdkClientConfig {
    /// Region override; the SDK provider chain decides when `None`
    pub region: Option<String>,
    /// Shared-config profile override
    pub profile: Option<String>,
    pub caller_reference_prefix: String,
}

impl Default for SdkClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            caller_reference_prefix: DEFAULT_CALLER_REFERENCE_PREFIX.to_string(),
        }
    }
}

/// CloudFront client that blocks on a private current-thread runtime.
pub struct SdkCloudFront {
    client: Client,
    runtime: Runtime,
    references: CallerReferenceGenerator,
}

impl SdkCloudFront {
    /// Resolve configuration and credentials, then build the client.
    ///
    /// Fails with [`Error::Credentials`] when the provider chain yields no
    /// usable credentials.
    pub fn connect(config: &SdkClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| Error::Io {
                path: None,
                message: format!("failed to start async runtime: {source}"),
                source,
            })?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = runtime.block_on(loader.load());

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| Error::credentials("no credentials provider configured"))?;
        runtime
            .block_on(provider.provide_credentials())
            .map_err(|e| Error::credentials(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(
            region = ?sdk_config.region(),
            profile = config.profile.as_deref().unwrap_or("default"),
            "Resolved AWS credentials"
        );

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
            references: CallerReferenceGenerator::new(config.caller_reference_prefix.clone()),
        })
    }
}

fn to_utc(instant: &SdkDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(instant.secs(), instant.subsec_nanos()).unwrap_or_default()
}

fn remote_error<E: std::error::Error>(operation: RemoteOperation, err: &E) -> Error {
    Error::remote(operation, DisplayErrorContext(err).to_string())
}

impl CloudFrontApi for SdkCloudFront {
    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        let op = RemoteOperation::ListDistributions;
        tracing::debug!("Listing distributions");
        let output = self
            .runtime
            .block_on(self.client.list_distributions().send())
            .map_err(|e| remote_error(op, &e))?;

        let distributions: Vec<Distribution> = output
            .distribution_list()
            .map(|list| {
                list.items()
                    .iter()
                    .map(|summary| {
                        let aliases = summary
                            .aliases()
                            .map(|aliases| aliases.items().to_vec())
                            .unwrap_or_default();
                        Distribution::new(summary.id(), aliases)
                    })
                    .collect()
            })
            .unwrap_or_default();

        tracing::info!(count = distributions.len(), "Listed distributions");
        Ok(distributions)
    }

    fn list_invalidations(&self, distribution_id: &str) -> Result<Vec<Invalidation>> {
        let op = RemoteOperation::ListInvalidations;
        let output = self
            .runtime
            .block_on(
                self.client
                    .list_invalidations()
                    .distribution_id(distribution_id)
                    .send(),
            )
            .map_err(|e| remote_error(op, &e))?;

        let invalidations: Vec<Invalidation> = output
            .invalidation_list()
            .map(|list| {
                list.items()
                    .iter()
                    .map(|summary| {
                        Invalidation::new(
                            summary.id(),
                            to_utc(summary.create_time()),
                            summary.status(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        tracing::info!(
            distribution_id,
            count = invalidations.len(),
            "Listed invalidations"
        );
        Ok(invalidations)
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

        let paths = Paths::builder()
            .quantity(request.quantity())
            .set_items(Some(request.paths()))
            .build()
            .map_err(|e| remote_error(op, &e))?;
        let batch = InvalidationBatch::builder()
            .paths(paths)
            .caller_reference(request.caller_reference.clone())
            .build()
            .map_err(|e| remote_error(op, &e))?;

        tracing::info!(
            distribution_id,
            path = %request.path_pattern,
            caller_reference = %request.caller_reference,
            "Creating invalidation"
        );
        let output = self
            .runtime
            .block_on(
                self.client
                    .create_invalidation()
                    .distribution_id(distribution_id)
                    .invalidation_batch(batch)
                    .send(),
            )
            .map_err(|e| remote_error(op, &e))?;

        let created = output
            .invalidation()
            .ok_or_else(|| Error::remote(op, "response did not include the invalidation"))?;
        Ok(Invalidation::new(
            created.id(),
            to_utc(created.create_time()),
            created.status(),
        ))
    }

    fn name(&self) -> &'static str {
        "aws"
    }
}
