// # DNS Backend Trait
//
// Defines the interface a synchronizer uses to read and mutate the
// provider's record set.
//
// ## Implementations
//
// - Rate-limited caching backend: `dyndns-backend-cache` crate
//
// ## Usage
//
// ```rust,ignore
// use dyndns_core::DnsBackend;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let backend = /* DnsBackend implementation */;
//
//     if let Some(record) = backend.get_record("host.example.com.", "A").await? {
//         println!("current: {:?}", record.data());
//     }
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::Record;

/// Trait for DNS backend implementations
///
/// A backend mediates every interaction with the provider's record set.
/// Implementations are expected to shield the provider from excessive
/// calls: callers may invoke [`get_record`](DnsBackend::get_record) at an
/// arbitrary rate and rely on the backend to throttle and cache.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and callable concurrently from
/// arbitrary tasks.
///
/// # Cancellation
///
/// Callers cancel an in-flight operation by dropping the returned future;
/// there is no separate context parameter.
#[async_trait]
pub trait DnsBackend: Send + Sync {
    /// Get the record currently associated with (name, type)
    ///
    /// Must never issue more than the implementation's rate-limited number
    /// of full-provider queries, regardless of call volume.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Record))`: the matching record, from the provider or a
    ///   cached snapshot
    /// - `Ok(None)`: no record exists for (name, type). This is a distinct
    ///   outcome, never an empty stand-in record and never an error
    /// - `Err(Error)`: unrecoverable transport/provider failure during an
    ///   allowed refresh
    async fn get_record(&self, name: &str, rtype: &str) -> crate::Result<Option<Record>>;

    /// Submit one batched change containing the supplied additions and
    /// deletions
    ///
    /// Name, type, TTL and data order of every record are preserved
    /// verbatim. The contract does not promise atomicity beyond what the
    /// underlying provider offers; partial application is the provider's
    /// decision, not this component's.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the change request was accepted by the provider
    /// - `Err(Error)`: transport/provider failure; the caller owns retry
    ///   policy
    async fn update_records(
        &self,
        additions: &[Record],
        deletions: &[Record],
    ) -> crate::Result<()>;
}
