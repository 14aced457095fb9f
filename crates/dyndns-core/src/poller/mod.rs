//! Periodic public-IP detection with fan-out to subscriber channels
//!
//! The [`IpAddressPoller`] runs as one dedicated task: it asks an
//! [`ExternalIpSource`] for the current address on a fixed timer and
//! broadcasts each detected value to every registered subscriber channel.
//!
//! ## Delivery semantics
//!
//! Every subscriber channel holds at most one unconsumed value. Broadcast
//! uses a non-blocking send: a subscriber that has not consumed its
//! previous value keeps that old value and the new one is dropped for that
//! subscriber only. This "most-recent-unconsumed-value" behavior is a
//! guarantee, not a bug: a slow consumer can never block the poll loop or
//! other subscribers, and tests assert the drop.
//!
//! ## Lifecycle
//!
//! Idle until [`run`](IpAddressPoller::run) is entered, which performs one
//! immediate poll and then repeats on the timer. The stop signal is
//! checked between ticks, so worst-case shutdown latency is one poll
//! interval. Once stopped, the poller is terminal.

use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::config::PollerConfig;
use crate::traits::{ExternalIpSource, IpVersion};

/// Periodic poller for the host's current public internet IP address.
///
/// Registration and broadcast share one internal lock, so calling
/// [`channel`](Self::channel) while the loop is already running is safe;
/// membership is append-only for the poller's lifetime.
pub struct IpAddressPoller {
    /// Registered subscriber channels; guarded for concurrent
    /// registration and broadcast
    subscribers: Mutex<Vec<mpsc::Sender<String>>>,

    /// Time between polls
    poll_interval: Duration,

    /// IP detection capability (typically a multi-source consensus)
    source: Arc<dyn ExternalIpSource>,

    /// Address family this instance tracks
    version: IpVersion,
}

impl IpAddressPoller {
    /// Create a new poller
    ///
    /// # Parameters
    ///
    /// - `source`: IP detection capability
    /// - `poll_interval`: time between polls
    /// - `version`: address family to track
    pub fn new(
        source: Arc<dyn ExternalIpSource>,
        poll_interval: Duration,
        version: IpVersion,
    ) -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            poll_interval,
            source,
            version,
        }
    }

    /// Create a poller from a validated [`PollerConfig`]
    pub fn from_config(
        source: Arc<dyn ExternalIpSource>,
        config: &PollerConfig,
    ) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::new(
            source,
            Duration::from_secs(config.poll_interval_secs),
            config.ip_version.into(),
        ))
    }

    /// Register a new subscriber and return its receiving end
    ///
    /// The channel buffers exactly one value. Registration is append-only:
    /// there is no removal operation, and a dropped receiver simply stops
    /// consuming (its sends fail silently from then on).
    pub fn channel(&self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(1);
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    /// Run one polling event: detect the current IP and broadcast it
    ///
    /// On detection failure the error is returned and no subscriber is
    /// notified. On success the address is delivered as text to every
    /// subscriber whose buffer slot is free; subscribers holding an
    /// unconsumed value are skipped.
    pub async fn poll(&self) -> crate::Result<()> {
        let ip: IpAddr = self
            .source
            .external_ip(self.version)
            .await
            .map_err(|e| crate::Error::ip_source(format!("could not obtain IP address: {e}")))?;

        let text = ip.to_string();
        debug!("detected external IP: {}", text);

        let subscribers = self
            .subscribers
            .lock()
            .expect("subscriber lock poisoned");
        for subscriber in subscribers.iter() {
            // Non-blocking: a full slot keeps its old value, closed
            // receivers are ignored.
            let _ = subscriber.try_send(text.clone());
        }
        Ok(())
    }

    /// Run the poll loop until the shutdown signal is observed
    ///
    /// Performs one immediate poll, then polls on the fixed interval.
    /// Poll failures are logged and never stop the loop. Returns `Ok(())`
    /// once the shutdown signal fires (a dropped sender counts), even if
    /// the most recent poll failed.
    pub async fn run(&self, mut shutdown: oneshot::Receiver<()>) -> crate::Result<()> {
        if let Err(e) = self.poll().await {
            warn!("Error polling for IP: {}", e);
        }
        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {
                    if let Err(e) = self.poll().await {
                        warn!("Error polling for IP: {}", e);
                    }
                }
                _ = &mut shutdown => {
                    info!("IP poller stopping");
                    return Ok(());
                }
            }
        }
    }

    /// The configured poll interval
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// The address family this poller tracks
    pub fn version(&self) -> IpVersion {
        self.version
    }
}
