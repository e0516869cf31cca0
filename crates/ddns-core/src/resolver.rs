//! Sequential fallback across IP sources
//!
//! Sources are tried strictly in order. The first one that yields an
//! address wins and the remaining sources are never contacted. A failing
//! source is logged and skipped; only when every source has failed does
//! resolution fail, with [`Error::IpSourcesExhausted`].

use crate::error::{Error, Result};
use crate::traits::IpSource;
use std::net::IpAddr;
use tracing::{debug, warn};

/// Ordered list of IP sources queried one after another
pub struct FallbackResolver {
    sources: Vec<Box<dyn IpSource>>,
}

impl FallbackResolver {
    /// Create a resolver over `sources`, queried in the given order
    pub fn new(sources: Vec<Box<dyn IpSource>>) -> Self {
        Self { sources }
    }

    /// Number of configured sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are configured
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Endpoints in query order
    pub fn endpoints(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.endpoint()).collect()
    }

    /// Resolve the current public IP
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: The address from the first source that succeeded
    /// - `Err(Error::IpSourcesExhausted)`: If every source failed
    pub async fn resolve(&self) -> Result<IpAddr> {
        for source in &self.sources {
            debug!("Checking current IP via {}", source.endpoint());

            match source.current().await {
                Ok(ip) => {
                    debug!("{} returned {}", source.endpoint(), ip);
                    return Ok(ip);
                }
                Err(e) => {
                    warn!("getCurrentIP() url:{} error:{}", source.endpoint(), e);
                }
            }
        }

        Err(Error::ip_sources_exhausted(self.sources.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource {
        url: &'static str,
        answer: Option<IpAddr>,
    }

    #[async_trait]
    impl IpSource for StaticSource {
        async fn current(&self) -> Result<IpAddr> {
            self.answer
                .ok_or_else(|| Error::ip_source(format!("{} unreachable", self.url)))
        }

        fn endpoint(&self) -> &str {
            self.url
        }
    }

    #[tokio::test]
    async fn test_empty_resolver_is_exhausted() {
        let resolver = FallbackResolver::new(Vec::new());
        assert!(resolver.is_empty());

        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, Error::IpSourcesExhausted { attempted: 0 }));
    }

    #[tokio::test]
    async fn test_endpoints_in_order() {
        let resolver = FallbackResolver::new(vec![
            Box::new(StaticSource {
                url: "http://a",
                answer: None,
            }),
            Box::new(StaticSource {
                url: "http://b",
                answer: Some(IpAddr::from([198, 51, 100, 1])),
            }),
        ]);

        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.endpoints(), vec!["http://a", "http://b"]);
        assert_eq!(
            resolver.resolve().await.unwrap(),
            IpAddr::from([198, 51, 100, 1])
        );
    }
}
