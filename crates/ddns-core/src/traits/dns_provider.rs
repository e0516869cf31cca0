// # DNS Provider Trait
//
// Defines the interface for submitting a record upsert to a DNS provider.
//
// ## Implementations
//
// - Route 53: `ddns-provider-route53` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::{DnsProvider, UpdateConfig, UpdateRequest};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//     let config = UpdateConfig::new("home.example.com", 60, "Z123");
//     let request = UpdateRequest::new(&config, "203.0.113.7".parse()?);
//
//     let result = provider.upsert(&request).await?;
//     println!("{}", result);
//
//     Ok(())
// }
// ```

use crate::record::{ChangeBatch, UpdateRequest};
use async_trait::async_trait;
use std::fmt;

/// Result of a DNS upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// The change batch was accepted by the provider
    Submitted {
        /// Provider response, rendered for logging
        description: String,
    },
    /// Dry-run: the batch was built but never sent
    DryRun {
        /// The batch that would have been submitted
        change_batch: ChangeBatch,
    },
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateResult::Submitted { description } => write!(f, "{}", description),
            UpdateResult::DryRun { change_batch } => write!(
                f,
                "[DRY-RUN] {} change(s) not submitted: {}",
                change_batch.changes.len(),
                change_batch.comment
            ),
        }
    }
}

/// Trait for DNS provider implementations
///
/// # Contract
///
/// - Exactly one provider API call per [`upsert`](DnsProvider::upsert)
/// - Only the SDK/client's own bounded retry policy applies; providers
///   never loop or sleep themselves
/// - Errors are returned with the provider's message intact
/// - All-or-nothing: the batch either applies or the call fails
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Submit an UPSERT for the request's A record
    ///
    /// # Parameters
    ///
    /// - `request`: The validated update request
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult)`: The provider's response description
    /// - `Err(Error)`: If the provider rejected the change or was unreachable
    async fn upsert(&self, request: &UpdateRequest) -> Result<UpdateResult, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
