//! Test doubles shared by the backend contract tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use dyndns_core::error::{Error, Result};
use dyndns_core::record::{Record, RecordPage, ZoneChange};
use dyndns_core::traits::ZoneClient;

/// A scripted zone client serving a paginated in-memory zone.
///
/// Page tokens are stringified page indices. Counts enumerations
/// (first-page fetches) separately from individual page fetches so tests
/// can assert "exactly one zone refresh" directly.
pub struct FakeZoneClient {
    pages: Mutex<Vec<Vec<Record>>>,
    enumerations: AtomicUsize,
    page_fetches: AtomicUsize,
    submitted: Mutex<Vec<ZoneChange>>,
    fail_listing: AtomicBool,
    fail_submission: AtomicBool,
    page_delay: Mutex<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeZoneClient {
    pub fn new() -> Self {
        Self::with_zone(Vec::new(), 100)
    }

    /// Build a client whose zone is `records` split into pages of
    /// `page_size`
    pub fn with_zone(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            pages: Mutex::new(Self::paginate(records, page_size)),
            enumerations: AtomicUsize::new(0),
            page_fetches: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
            fail_listing: AtomicBool::new(false),
            fail_submission: AtomicBool::new(false),
            page_delay: Mutex::new(Duration::ZERO),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn paginate(records: Vec<Record>, page_size: usize) -> Vec<Vec<Record>> {
        assert!(page_size > 0, "page_size must be > 0");
        if records.is_empty() {
            return vec![Vec::new()];
        }
        records
            .chunks(page_size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Replace the zone contents (takes effect on the next enumeration)
    pub fn set_zone(&self, records: Vec<Record>, page_size: usize) {
        *self.pages.lock().unwrap() = Self::paginate(records, page_size);
    }

    /// Number of zone enumerations started (first-page fetches)
    pub fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    /// Number of individual page fetches
    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }

    /// Changes submitted so far, in order
    pub fn submitted(&self) -> Vec<ZoneChange> {
        self.submitted.lock().unwrap().clone()
    }

    /// Make every list_page call fail with a transport error
    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    /// Make every submit_change call fail with a transport error
    pub fn fail_submission(&self, fail: bool) {
        self.fail_submission.store(fail, Ordering::SeqCst);
    }

    /// Delay each page fetch (for concurrency tests)
    pub fn set_page_delay(&self, delay: Duration) {
        *self.page_delay.lock().unwrap() = delay;
    }

    /// Highest number of concurrently in-flight page fetches observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ZoneClient for FakeZoneClient {
    async fn list_page(&self, page_token: Option<&str>) -> Result<RecordPage> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(Error::transport("listing failed"));
        }

        let index = match page_token {
            Some(token) => token.parse::<usize>().expect("fake page token"),
            None => {
                self.enumerations.fetch_add(1, Ordering::SeqCst);
                0
            }
        };
        self.page_fetches.fetch_add(1, Ordering::SeqCst);

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.page_delay.lock().unwrap();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }

        let page = {
            let pages = self.pages.lock().unwrap();
            RecordPage {
                records: pages[index].clone(),
                next_page_token: (index + 1 < pages.len()).then(|| (index + 1).to_string()),
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(page)
    }

    async fn submit_change(&self, change: &ZoneChange) -> Result<()> {
        if self.fail_submission.load(Ordering::SeqCst) {
            return Err(Error::transport("change submission failed"));
        }
        self.submitted.lock().unwrap().push(change.clone());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Shorthand for an A record
pub fn a_record(name: &str, ttl: u32, addr: &str) -> Record {
    Record::new(name, "A", ttl, vec![addr.to_string()])
}
