// # Rate-Limited Caching DNS Backend
//
// This crate provides the concrete `DnsBackend` used by the sync system:
// a wrapper around any provider `ZoneClient` that shields the provider
// from excessive calls.
//
// ## How it protects the provider
//
// - A single-token bucket (default refill: one token per 5 seconds) gates
//   full zone enumerations. At most one enumeration happens per refill
//   window, regardless of lookup volume.
// - Every allowed enumeration rebuilds a complete zone snapshot; all
//   lookups inside the window are served from that snapshot without any
//   provider traffic.
// - The bucket and the snapshot are guarded jointly by one lock: snapshot
//   reads proceed concurrently, a refresh is exclusive and never
//   re-entrant.
//
// ## What it deliberately does NOT do
//
// - NO retry or backoff: transport errors propagate unmodified; the
//   caller owns retry policy
// - NO cache invalidation after `update_records`: lookups keep returning
//   pre-update data until the next limiter-allowed refresh. Callers that
//   just submitted a change must expect stale reads inside the window
// - NO background tasks; all work happens on the caller's task
// - NO wire protocol: everything provider-specific sits behind
//   `ZoneClient`

mod limiter;
mod snapshot;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use dyndns_core::config::BackendConfig;
use dyndns_core::record::{Record, RecordKey, ZoneChange};
use dyndns_core::traits::{DnsBackend, ZoneClient};

use crate::snapshot::SnapshotCache;

/// Default minimum interval between full zone refreshes
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Rate-limited caching implementation of [`DnsBackend`].
///
/// Generic over the provider client so tests can drive it with a fake
/// zone and binaries can plug in a real provider.
///
/// # Staleness
///
/// A successful [`update_records`](DnsBackend::update_records) does not
/// touch the cache. This decoupling is deliberate: invalidating on write
/// would let a chatty caller defeat the rate limiter by alternating
/// writes and lookups.
pub struct CachedBackend<C> {
    client: C,
    cache: SnapshotCache,
}

impl<C: ZoneClient> CachedBackend<C> {
    /// Create a backend with the default refresh interval (5s)
    pub fn new(client: C) -> Self {
        Self::with_refresh_interval(client, DEFAULT_REFRESH_INTERVAL)
    }

    /// Create a backend with a custom minimum refresh interval
    pub fn with_refresh_interval(client: C, refresh_interval: Duration) -> Self {
        Self {
            client,
            cache: SnapshotCache::new(refresh_interval),
        }
    }

    /// Create a backend from a validated [`BackendConfig`]
    pub fn from_config(client: C, config: &BackendConfig) -> dyndns_core::Result<Self> {
        config.validate()?;
        Ok(Self::with_refresh_interval(
            client,
            Duration::from_secs(config.min_refresh_interval_secs),
        ))
    }

    /// Number of records in the current zone snapshot (diagnostics)
    pub async fn cached_record_count(&self) -> usize {
        self.cache.len().await
    }

    /// The wrapped provider client
    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: ZoneClient> DnsBackend for CachedBackend<C> {
    async fn get_record(&self, name: &str, rtype: &str) -> dyndns_core::Result<Option<Record>> {
        let key = RecordKey::new(name, rtype);

        if let Some(cached) = self.cache.lookup_if_throttled(&key).await {
            debug!("lookup throttled, serving snapshot for {} {}", name, rtype);
            return Ok(cached);
        }

        self.cache.refresh(&self.client, &key).await
    }

    async fn update_records(
        &self,
        additions: &[Record],
        deletions: &[Record],
    ) -> dyndns_core::Result<()> {
        let change = ZoneChange {
            additions: additions.to_vec(),
            deletions: deletions.to_vec(),
        };

        debug!(
            "submitting change via {}: {} additions, {} deletions",
            self.client.provider_name(),
            change.additions.len(),
            change.deletions.len()
        );

        self.client.submit_change(&change).await
    }
}
