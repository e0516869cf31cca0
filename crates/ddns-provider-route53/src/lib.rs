// # Route 53 DNS Provider
//
// This crate provides an AWS Route 53 DNS provider for the DDNS updater.
//
// ## Behaviour
//
// - Exactly one `ChangeResourceRecordSets` call per upsert
// - The batch holds a single UPSERT of an A record with one value
// - Transient failures are retried by the SDK only, bounded at 3 retries
// - Errors keep the service's code and message verbatim
// - Dry-run mode builds and logs the batch without calling the API
//
// ## Credentials
//
// Credentials and region are never configured here. They come from the AWS
// default provider chain (environment, shared profile, instance role), or
// from an explicitly built SDK client passed to `Route53Provider::new`.
//
// ## API Reference
//
// - ChangeResourceRecordSets: POST `/2013-04-01/hostedzone/:id/rrset`

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_route53::Client;
use aws_sdk_route53::config::Region;
use aws_sdk_route53::config::retry::RetryConfig;
use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;
use aws_sdk_route53::types;
use ddns_core::record::{Change, ChangeAction, ChangeBatch, RecordType, UpdateRequest};
use ddns_core::traits::{DnsProvider, UpdateResult};
use ddns_core::{Error, Result};

/// Provider name used in errors and logs
pub const PROVIDER_NAME: &str = "route53";

/// Automatic retries for transient provider errors (after the first attempt)
pub const MAX_RETRIES: u32 = 3;

/// Region used when none is configured; Route 53 is a global service
pub const DEFAULT_REGION: &str = "us-east-1";

/// Options for loading the ambient AWS configuration
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    /// Named profile from the shared config files
    pub profile: Option<String>,
    /// Region override
    pub region: Option<String>,
}

/// Load the ambient AWS configuration with the bounded retry policy
pub async fn load_sdk_config(options: &AwsOptions) -> aws_config::SdkConfig {
    let region = RegionProviderChain::first_try(options.region.clone().map(Region::new))
        .or_default_provider()
        .or_else(Region::new(DEFAULT_REGION));

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .retry_config(RetryConfig::standard().with_max_attempts(MAX_RETRIES + 1));

    if let Some(profile) = &options.profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}

/// Route 53 DNS provider
#[derive(Debug, Clone)]
pub struct Route53Provider {
    /// SDK client
    client: Client,

    /// Dry-run mode: build and log the batch but skip the API call
    dry_run: bool,
}

impl Route53Provider {
    /// Create a provider from an already configured SDK client
    pub fn new(client: Client, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    /// Create a provider from the ambient AWS environment
    pub async fn from_env(options: &AwsOptions, dry_run: bool) -> Self {
        let config = load_sdk_config(options).await;
        Self::new(Client::new(&config), dry_run)
    }

    /// Whether this provider is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    async fn upsert(&self, request: &UpdateRequest) -> Result<UpdateResult> {
        let batch = request.change_batch();

        tracing::info!(
            "Upserting Route 53 record: {} -> {} (ttl={}, zone={}) [mode: {}]",
            request.name,
            request.ip,
            request.ttl,
            request.hosted_zone_id,
            if self.dry_run { "DRY-RUN" } else { "LIVE" }
        );

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would submit change batch to zone {}: {}",
                request.hosted_zone_id,
                serde_json::to_string(&batch)?
            );
            return Ok(UpdateResult::DryRun {
                change_batch: batch,
            });
        }

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&request.hosted_zone_id)
            .change_batch(to_sdk_change_batch(&batch)?)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(UpdateResult::Submitted {
            description: format!("{:?}", output.change_info()),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

/// Translate the core change batch into the SDK shape
pub fn to_sdk_change_batch(batch: &ChangeBatch) -> Result<types::ChangeBatch> {
    let changes = batch
        .changes
        .iter()
        .map(to_sdk_change)
        .collect::<Result<Vec<_>>>()?;

    types::ChangeBatch::builder()
        .comment(&batch.comment)
        .set_changes(Some(changes))
        .build()
        .map_err(|e| Error::invalid_input(format!("Invalid change batch: {}", e)))
}

fn to_sdk_change(change: &Change) -> Result<types::Change> {
    let records = change
        .record_set
        .values
        .iter()
        .map(|value| {
            types::ResourceRecord::builder()
                .value(value)
                .build()
                .map_err(|e| Error::invalid_input(format!("Invalid resource record: {}", e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let record_set = types::ResourceRecordSet::builder()
        .name(&change.record_set.name)
        .r#type(rr_type(change.record_set.record_type))
        .ttl(i64::from(change.record_set.ttl))
        .set_resource_records(Some(records))
        .build()
        .map_err(|e| Error::invalid_input(format!("Invalid record set: {}", e)))?;

    types::Change::builder()
        .action(change_action(change.action))
        .resource_record_set(record_set)
        .build()
        .map_err(|e| Error::invalid_input(format!("Invalid change: {}", e)))
}

fn change_action(action: ChangeAction) -> types::ChangeAction {
    match action {
        ChangeAction::Upsert => types::ChangeAction::Upsert,
    }
}

fn rr_type(record_type: RecordType) -> types::RrType {
    match record_type {
        RecordType::A => types::RrType::A,
    }
}

/// Map an SDK failure to the core error taxonomy
///
/// Service errors keep the service's code and message verbatim; anything
/// else (dispatch, timeout, unparsable response) keeps the full error chain.
fn map_sdk_error(err: SdkError<ChangeResourceRecordSetsError>) -> Error {
    let Some(e) = err.as_service_error() else {
        return Error::provider(PROVIDER_NAME, DisplayErrorContext(&err).to_string());
    };

    let message = match (e.code(), e.message()) {
        (Some(code), Some(message)) => format!("{}: {}", code, message),
        (Some(code), None) => code.to_string(),
        (None, Some(message)) => message.to_string(),
        (None, None) => DisplayErrorContext(&err).to_string(),
    };

    if e.is_no_such_hosted_zone() {
        return Error::not_found(message);
    }
    if e.is_invalid_change_batch() || e.is_invalid_input() {
        return Error::invalid_input(message);
    }
    if e.is_prior_request_not_complete() {
        return Error::rate_limited(message);
    }

    match e.code() {
        Some("AccessDenied" | "InvalidClientTokenId" | "SignatureDoesNotMatch") => {
            Error::auth(message)
        }
        Some("Throttling") => Error::rate_limited(message),
        _ => Error::provider(PROVIDER_NAME, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddns_core::UpdateConfig;

    fn request() -> UpdateRequest {
        let config = UpdateConfig::new("home.example.com", 120, "Z123");
        UpdateRequest::new(&config, "203.0.113.7".parse().unwrap())
    }

    fn offline_client() -> Client {
        let config = aws_sdk_route53::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(DEFAULT_REGION))
            .build();
        Client::from_conf(config)
    }

    #[test]
    fn test_sdk_change_batch() {
        let batch = to_sdk_change_batch(&request().change_batch()).unwrap();
        let debug = format!("{:?}", batch);

        assert!(debug.contains("Upsert"));
        assert!(debug.contains("203.0.113.7"));
        assert!(debug.contains("home.example.com"));
        assert!(debug.contains("DDNS Update for home.example.com"));
        assert!(debug.contains("ttl: Some(120)"));
    }

    #[test]
    fn test_action_and_type_mapping() {
        assert_eq!(change_action(ChangeAction::Upsert), types::ChangeAction::Upsert);
        assert_eq!(rr_type(RecordType::A), types::RrType::A);
    }

    #[test]
    fn test_provider_name() {
        let provider = Route53Provider::new(offline_client(), false);
        assert_eq!(provider.provider_name(), "route53");
        assert!(!provider.is_dry_run());
    }

    #[tokio::test]
    async fn test_dry_run_skips_api() {
        let provider = Route53Provider::new(offline_client(), true);

        let result = provider.upsert(&request()).await.expect("dry run never calls out");

        match result {
            UpdateResult::DryRun { change_batch } => {
                assert_eq!(change_batch, request().change_batch());
            }
            other => panic!("expected dry run, got {other:?}"),
        }
    }
}
