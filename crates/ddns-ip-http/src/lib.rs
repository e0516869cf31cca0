// # HTTP IP Source
//
// This crate provides HTTP IP-echo sources for the DDNS updater.
//
// ## Purpose
//
// Each source GETs one endpoint that answers with the caller's public IP as
// the entire plain-text body (surrounding whitespace allowed). Sources are
// queried in order by `ddns_core::FallbackResolver`.
//
// ## Behaviour
//
// - One GET per call, bounded by a per-request timeout (5 seconds default)
// - Non-2xx status, transport errors and timeouts are errors
// - The body is trimmed and parsed as an IP address; anything else is an error

use ddns_core::config::{DEFAULT_IP_CHECK_TIMEOUT_SECS, IpCheckConfig};
use ddns_core::traits::IpSource;
use ddns_core::{Error, FallbackResolver, Result};

use std::net::IpAddr;
use std::time::Duration;

/// Default IP check services, queried in this order
pub const DEFAULT_IP_SERVICES: &[&str] = &[
    "http://whatismyip.akamai.com/",
    "http://checkip.amazonaws.com",
    "https://checkip.amazonaws.com",
];

/// Default IP check services as owned strings
pub fn default_urls() -> Vec<String> {
    DEFAULT_IP_SERVICES.iter().map(|s| s.to_string()).collect()
}

/// HTTP-based IP source for a single echo endpoint
pub struct HttpIpSource {
    /// URL to fetch IP from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source with the default 5 second timeout
    ///
    /// # Parameters
    ///
    /// - `url`: URL to fetch IP from (e.g., "https://checkip.amazonaws.com")
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_IP_CHECK_TIMEOUT_SECS))
    }

    /// Create with a custom per-request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(url, client))
    }

    /// Create with a pre-built client
    ///
    /// Lets several sources share one connection pool.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Fetch current IP from the HTTP service
    async fn fetch_ip(&self) -> Result<IpAddr> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::http(format!("http.Get() url:{} error:request timed out", self.url))
            } else {
                Error::http(format!("http.Get() url:{} error:{}", self.url, e))
            }
        })?;

        if !response.status().is_success() {
            return Err(Error::http(format!(
                "http.Get() url:{} status:{}",
                self.url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response body: {}", e)))?;

        parse_ip(&body)
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<IpAddr> {
        self.fetch_ip().await
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Parse an echo response body into an IP address
///
/// Surrounding whitespace is ignored.
pub fn parse_ip(body: &str) -> Result<IpAddr> {
    let text = body.trim();
    text.parse()
        .map_err(|_| Error::ip_source(format!("invalid IP:{}", text)))
}

/// Build one source per configured URL, sharing a single HTTP client
pub fn sources_from_config(config: &IpCheckConfig) -> Result<Vec<Box<dyn IpSource>>> {
    config.validate()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

    let sources = config
        .urls
        .iter()
        .map(|url| {
            tracing::debug!("Registering IP check url: {}", url);
            Box::new(HttpIpSource::with_client(url.clone(), client.clone())) as Box<dyn IpSource>
        })
        .collect();

    Ok(sources)
}

/// Build a [`FallbackResolver`] over the configured URLs
pub fn resolver_from_config(config: &IpCheckConfig) -> Result<FallbackResolver> {
    Ok(FallbackResolver::new(sources_from_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ip_trims_whitespace() {
        assert_eq!(
            parse_ip("  203.0.113.7\n").unwrap(),
            IpAddr::from([203, 0, 113, 7])
        );
        assert_eq!(
            parse_ip("2001:db8::1\r\n").unwrap(),
            "2001:db8::1".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_parse_ip_rejects_garbage() {
        for body in ["", "1.1.1", "<html>", "203.0.113.7 extra"] {
            let err = parse_ip(body).expect_err("not an IP");
            assert!(matches!(err, Error::IpSource(_)));
        }
    }

    #[test]
    fn test_default_services_order() {
        assert_eq!(
            default_urls(),
            vec![
                "http://whatismyip.akamai.com/",
                "http://checkip.amazonaws.com",
                "https://checkip.amazonaws.com",
            ]
        );
    }

    #[test]
    fn test_sources_from_config() {
        let sources = sources_from_config(&IpCheckConfig::new(default_urls())).unwrap();
        let endpoints: Vec<&str> = sources.iter().map(|s| s.endpoint()).collect();
        assert_eq!(endpoints, DEFAULT_IP_SERVICES);
    }

    #[test]
    fn test_sources_from_invalid_config() {
        assert!(sources_from_config(&IpCheckConfig::new(Vec::new())).is_err());
    }
}
