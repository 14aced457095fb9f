// # dyndns-core
//
// Core library for the cloud dynamic-DNS sync system.
//
// ## Architecture Overview
//
// This library provides the building blocks for keeping a DNS provider's
// record set in line with a host's current public IP:
//
// - **Record**: immutable DNS resource record value
// - **DnsBackend**: trait for record lookup and batched record mutation
// - **ZoneClient**: trait a provider-specific client must satisfy
//   (paginated zone enumeration, batched change submission)
// - **ExternalIpSource**: trait for consensus-based public-IP detection
// - **IpAddressPoller**: periodic IP detection with non-blocking fan-out
//   to any number of subscriber channels
//
// The rate-limited caching implementation of `DnsBackend` lives in the
// `dyndns-backend-cache` crate; a synchronizer loop that consumes the
// poller's output and reconciles records through a backend is left to
// embedders.
//
// ## Design Principles
//
// 1. **Separation of Concerns**: provider wire protocols and IP-detection
//    strategies sit behind traits; the core never talks to the network
// 2. **Provider Protection**: backends are expected to throttle and cache
//    so callers can poll aggressively without hammering the provider
// 3. **Library-First**: no logging subscriber, no runtime ownership;
//    everything is usable from an embedding application

pub mod config;
pub mod error;
pub mod poller;
pub mod record;
pub mod traits;

// Re-export core types for convenience
pub use config::{BackendConfig, PollerConfig};
pub use error::{Error, Result};
pub use poller::IpAddressPoller;
pub use record::{Record, RecordKey, RecordPage, ZoneChange};
pub use traits::{DnsBackend, ExternalIpSource, IpVersion, ZoneClient};
