// # IP Source Trait
//
// Defines the interface for learning the machine's current public IP.
//
// ## Implementations
//
// - HTTP echo endpoints: `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//
//     let current_ip = source.current().await?;
//     println!("{} says {}", source.endpoint(), current_ip);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::net::IpAddr;

/// Trait for IP source implementations
///
/// A source answers a single question: what is the public IP right now?
/// Sources are queried one at a time by the
/// [`FallbackResolver`](crate::FallbackResolver), in the order they were
/// configured.
///
/// # Contract
///
/// - One attempt per call: no retry, no sleeping, no caching
/// - Every failure (transport, timeout, unparsable body) is an `Err`;
///   the resolver decides whether to move on
/// - A returned address must be a syntactically valid IP
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: The current IP address
    /// - `Err(Error)`: If this source could not determine it
    async fn current(&self) -> Result<IpAddr, crate::Error>;

    /// Endpoint identifier used in log lines (e.g., the URL)
    fn endpoint(&self) -> &str;
}
