// # ddns-core
//
// Core library for the one-shot Route 53 dynamic DNS updater.
//
// ## Architecture Overview
//
// This library provides the provider-agnostic parts of a dynamic DNS update:
// - **IpSource**: Trait for learning the current public IP
// - **DnsProvider**: Trait for upserting DNS records via provider APIs
// - **FallbackResolver**: Ordered, short-circuiting fallback across IP sources
// - **DdnsEngine**: Validate → resolve → upsert, once per invocation
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from implementations
// 2. **Explicit Configuration**: No process-wide state; config is passed in
// 3. **Fail Early**: Validation happens before any network activity
// 4. **Library-First**: All core functionality can be used as a library

pub mod traits;
pub mod engine;
pub mod resolver;
pub mod record;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{IpSource, DnsProvider, UpdateResult};
pub use engine::{DdnsEngine, UpdateReport};
pub use resolver::FallbackResolver;
pub use record::{ChangeBatch, UpdateRequest};
pub use config::{IpCheckConfig, UpdateConfig};
pub use error::{Error, Result};
