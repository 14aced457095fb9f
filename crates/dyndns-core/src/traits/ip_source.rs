// # External IP Source Trait
//
// Defines the interface for detecting the host's current public IP
// address.
//
// ## Implementations
//
// Production implementations are expected to consult multiple independent
// IP-echo services and require a quorum among their answers before
// reporting a value. That consensus mechanism is a collaborator supplied
// by the embedder; this crate only defines the seam the poller consumes.

use async_trait::async_trait;
use std::net::IpAddr;

/// IP address family a poller instance tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

/// Trait for external IP detection implementations
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait ExternalIpSource: Send + Sync {
    /// Determine the current public IP address of the given family
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: the detected address
    /// - `Err(Error)`: detection failed (no quorum, all sources down, ...)
    async fn external_ip(&self, version: IpVersion) -> crate::Result<IpAddr>;
}
