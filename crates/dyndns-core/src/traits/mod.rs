//! Core traits for the dynamic-DNS sync system
//!
//! This module defines the abstract interfaces the rest of the workspace
//! builds against.
//!
//! - [`DnsBackend`]: look up a record, submit a batched change
//! - [`ZoneClient`]: the provider-specific client a backend wraps
//! - [`ExternalIpSource`]: detect the current public IP address

pub mod dns_backend;
pub mod ip_source;
pub mod zone_client;

pub use dns_backend::DnsBackend;
pub use ip_source::{ExternalIpSource, IpVersion};
pub use zone_client::ZoneClient;
