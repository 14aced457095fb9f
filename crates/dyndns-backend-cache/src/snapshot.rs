//! Zone snapshot cache guarded jointly with the rate limiter
//!
//! [`SnapshotCache`] owns the one `RwLock` protecting both the token
//! bucket and the record map, so no code outside this module can read or
//! mutate either without going through the lock. Throttled lookups take
//! the read lock and may proceed concurrently; a refresh holds the write
//! lock across the entire paginated enumeration, which structurally
//! guarantees a single in-flight refresh independent of the limiter.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use dyndns_core::record::{Record, RecordKey};
use dyndns_core::traits::ZoneClient;

use crate::limiter::TokenBucket;

struct CacheInner {
    bucket: TokenBucket,
    records: HashMap<RecordKey, Record>,
}

/// Full-zone snapshot cache plus its refresh limiter, behind one lock.
pub(crate) struct SnapshotCache {
    inner: RwLock<CacheInner>,
}

impl SnapshotCache {
    pub(crate) fn new(refresh_interval: Duration) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                bucket: TokenBucket::new(refresh_interval),
                records: HashMap::new(),
            }),
        }
    }

    /// Serve a lookup from the current snapshot if the limiter is not
    /// ready for a refresh.
    ///
    /// Returns `None` when a refresh is due (the caller should call
    /// [`refresh`](Self::refresh)); otherwise `Some(entry)` where the
    /// entry itself may be `None` for a key absent from the snapshot.
    /// Absence is not an error.
    pub(crate) async fn lookup_if_throttled(&self, key: &RecordKey) -> Option<Option<Record>> {
        let inner = self.inner.read().await;
        if inner.bucket.is_ready(Instant::now()) {
            return None;
        }
        Some(inner.records.get(key).cloned())
    }

    /// Enumerate the entire zone through `client`, replace the snapshot
    /// wholesale, and return the entry matching `key`.
    ///
    /// Re-checks the limiter under the write lock: if another task won the
    /// refresh race, the lookup is served from the snapshot it installed.
    /// A transport error aborts the refresh, leaves the previous snapshot
    /// untouched and propagates unmodified.
    pub(crate) async fn refresh(
        &self,
        client: &dyn ZoneClient,
        key: &RecordKey,
    ) -> dyndns_core::Result<Option<Record>> {
        let mut inner = self.inner.write().await;

        if !inner.bucket.try_consume(Instant::now()) {
            // Lost the race: a concurrent refresh consumed the token while
            // this task waited on the lock.
            return Ok(inner.records.get(key).cloned());
        }

        debug!("refreshing zone snapshot via {}", client.provider_name());

        let mut fresh: HashMap<RecordKey, Record> = HashMap::with_capacity(inner.records.len());
        let mut candidate: Option<Record> = None;
        let mut page_token: Option<String> = None;

        loop {
            let page = match client.list_page(page_token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "zone enumeration failed via {}: {}",
                        client.provider_name(),
                        e
                    );
                    return Err(e);
                }
            };

            for record in page.records {
                let record_key = record.key();
                if record_key == *key {
                    candidate = Some(record.clone());
                }
                fresh.insert(record_key, record);
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("zone snapshot refreshed: {} records", fresh.len());
        inner.records = fresh;
        Ok(candidate)
    }

    /// Number of records in the current snapshot.
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}
