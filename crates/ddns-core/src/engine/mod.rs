//! One-shot DDNS engine
//!
//! The DdnsEngine runs a single update per process invocation:
//!
//! ```text
//! UpdateConfig ── validate ──┐
//!                            ▼
//!                  ┌──────────────────┐      ┌─────────────┐
//!                  │ FallbackResolver │─────▶│  IpSource   │ × N, in order
//!                  └──────────────────┘      └─────────────┘
//!                            │ IpAddr
//!                            ▼
//!                  ┌──────────────────┐      ┌─────────────┐
//!                  │  UpdateRequest   │─────▶│ DnsProvider │ × 1
//!                  └──────────────────┘      └─────────────┘
//! ```
//!
//! ## Flow
//!
//! 1. Validate the configuration (no network activity on failure)
//! 2. Resolve the public IP through the ordered sources
//! 3. Build the update request and submit one UPSERT
//! 4. Report the result and elapsed time
//!
//! There is no loop, no state and no application-level retry.

use crate::config::UpdateConfig;
use crate::error::Result;
use crate::record::UpdateRequest;
use crate::resolver::FallbackResolver;
use crate::traits::{DnsProvider, UpdateResult};
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// IP that was written to the record
    pub ip: IpAddr,
    /// Provider result
    pub result: UpdateResult,
    /// Time spent resolving and updating
    pub elapsed: Duration,
}

/// One-shot DDNS engine
pub struct DdnsEngine {
    /// Ordered IP sources
    resolver: FallbackResolver,

    /// DNS provider for the upsert
    provider: Box<dyn DnsProvider>,
}

impl DdnsEngine {
    /// Create a new DDNS engine
    ///
    /// # Parameters
    ///
    /// - `resolver`: IP sources, in query order
    /// - `provider`: DNS provider implementation
    pub fn new(resolver: FallbackResolver, provider: Box<dyn DnsProvider>) -> Self {
        Self { resolver, provider }
    }

    /// Run one update
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateReport)`: The record was upserted (or dry-run)
    /// - `Err(Error::Config)`: Invalid configuration; nothing was contacted
    /// - `Err(Error::IpSourcesExhausted)`: No source produced an IP
    /// - `Err(Error)`: The provider call failed
    pub async fn run_once(&self, config: &UpdateConfig) -> Result<UpdateReport> {
        config.validate()?;

        let started = Instant::now();

        let ip = self.resolver.resolve().await?;
        info!("currentIP:{}", ip);

        let request = UpdateRequest::new(config, ip);
        let result = match self.provider.upsert(&request).await {
            Ok(result) => result,
            Err(e) => {
                error!(
                    "updateDNS() provider:{} error:{}",
                    self.provider.provider_name(),
                    e
                );
                return Err(e);
            }
        };

        info!("resultText:{}", result);

        Ok(UpdateReport {
            ip,
            result,
            elapsed: started.elapsed(),
        })
    }
}
