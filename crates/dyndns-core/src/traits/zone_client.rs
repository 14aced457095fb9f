// # Zone Client Trait
//
// Defines the seam between a DNS backend and a provider's API: paginated
// zone enumeration and batched change submission. Everything below this
// trait (wire protocol, authentication, endpoints) is provider territory.
//
// ## Construction
//
// Constructing a client is the only fatal failure point in the system
// (invalid credentials, unreachable metadata service). Constructors must
// fail fast with `Error::Authentication` or `Error::Config` so that a
// broken client can never reach a backend instance.
//
// ## Constraints on implementations
//
// - One API call per method invocation; no internal retry or backoff
//   (the caller owns retry policy)
// - No caching and no rate limiting (owned by the backend wrapping this
//   client)
// - No background tasks

use async_trait::async_trait;

use crate::record::{RecordPage, ZoneChange};

/// Trait for provider-specific zone clients
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// Fetch one page of the zone's record listing
    ///
    /// # Parameters
    ///
    /// - `page_token`: opaque continuation token from the previous page's
    ///   [`RecordPage::next_page_token`], or `None` for the first page
    ///
    /// # Returns
    ///
    /// - `Ok(RecordPage)`: the page; `next_page_token` is `None` on the
    ///   final page
    /// - `Err(Error)`: transport/provider failure, returned unmodified
    async fn list_page(&self, page_token: Option<&str>) -> crate::Result<RecordPage>;

    /// Submit one batched change request
    ///
    /// The change's addition and deletion lists must reach the provider in
    /// a single request, in order.
    async fn submit_change(&self, change: &ZoneChange) -> crate::Result<()>;

    /// Provider name for logging/debugging (e.g. "clouddns")
    fn provider_name(&self) -> &'static str;
}
