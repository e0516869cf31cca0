//! Configuration types for the DDNS updater
//!
//! Configuration is built once per run from the command line and passed
//! explicitly to each step. Nothing here touches the network; validation
//! must succeed before any IP check or provider call is attempted.

use serde::{Deserialize, Serialize};

/// Default record TTL in seconds
pub const DEFAULT_TTL: u32 = 60;

/// Default per-request timeout for IP check endpoints (in seconds)
pub const DEFAULT_IP_CHECK_TIMEOUT_SECS: u64 = 5;

/// Record update configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Record hostname to update (e.g., "home.example.com")
    pub name: String,

    /// Record TTL in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Route 53 hosted zone ID to update
    pub hosted_zone_id: String,
}

impl UpdateConfig {
    /// Create a new update configuration
    pub fn new(name: impl Into<String>, ttl: u32, hosted_zone_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            hosted_zone_id: hosted_zone_id.into(),
        }
    }

    /// Validate the configuration
    ///
    /// - `name` must be non-empty after trimming whitespace
    /// - `hosted_zone_id` must be non-empty after trimming whitespace
    /// - `ttl` must be non-zero
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.name.trim().is_empty() {
            return Err(crate::Error::config(format!(
                "name:{} not valid",
                self.name
            )));
        }

        if self.hosted_zone_id.trim().is_empty() {
            return Err(crate::Error::config(format!(
                "hostedZoneID:{} not valid",
                self.hosted_zone_id
            )));
        }

        if self.ttl == 0 {
            return Err(crate::Error::config("ttl can not be 0"));
        }

        Ok(())
    }
}

/// IP check endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCheckConfig {
    /// Endpoints to query, in order
    pub urls: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_ip_check_timeout_secs")]
    pub timeout_secs: u64,
}

impl IpCheckConfig {
    /// Create a configuration for the given endpoints with the default timeout
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            timeout_secs: DEFAULT_IP_CHECK_TIMEOUT_SECS,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.urls.is_empty() {
            return Err(crate::Error::config(
                "At least one IP check url is required",
            ));
        }

        for url in &self.urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(crate::Error::config(format!(
                    "IP check url must use HTTP or HTTPS scheme. Got: {}",
                    url
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(crate::Error::config("IP check timeout must be > 0"));
        }

        Ok(())
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_ip_check_timeout_secs() -> u64 {
    DEFAULT_IP_CHECK_TIMEOUT_SECS
}
