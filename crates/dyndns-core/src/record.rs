//! DNS resource record values and the shapes exchanged with a provider
//!
//! [`Record`] is the one data type shared by every component: the caching
//! backend stores them, the provider seam pages them in and batches them
//! out, and callers build them when requesting changes. Records are plain
//! immutable values; equality is by value and data order is significant.

use serde::{Deserialize, Serialize};

/// One DNS resource record: name, type, TTL and ordered data values.
///
/// Immutable after construction. `data` order is preserved exactly through
/// caching and change submission; for record types where the provider
/// treats data as ordered (e.g. MX preference lists) reordering would be
/// an observable change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    rtype: String,
    ttl: u32,
    data: Vec<String>,
}

impl Record {
    /// Create a new record
    ///
    /// # Parameters
    ///
    /// - `name`: fully-qualified record name (e.g. "host.example.com.")
    /// - `rtype`: record type (e.g. "A", "AAAA", "TXT")
    /// - `ttl`: time-to-live in seconds
    /// - `data`: ordered data values (e.g. the address strings)
    pub fn new(
        name: impl Into<String>,
        rtype: impl Into<String>,
        ttl: u32,
        data: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rtype: rtype.into(),
            ttl,
            data,
        }
    }

    /// The record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record type
    pub fn rtype(&self) -> &str {
        &self.rtype
    }

    /// Time-to-live in seconds
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Ordered data values
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// The cache key for this record
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.name, &self.rtype)
    }
}

/// Composite cache key: (name, type).
///
/// Unique within a zone snapshot at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    name: String,
    rtype: String,
}

impl RecordKey {
    /// Create a key from a name/type pair
    pub fn new(name: impl Into<String>, rtype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rtype: rtype.into(),
        }
    }

    /// The record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record type
    pub fn rtype(&self) -> &str {
        &self.rtype
    }
}

impl From<&Record> for RecordKey {
    fn from(record: &Record) -> Self {
        record.key()
    }
}

/// One page of a zone enumeration.
///
/// A zone listing may span any number of pages; `next_page_token` is
/// `None` only on the final page. Consumers must accumulate across pages
/// and never assume single-page results.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    /// Records on this page
    pub records: Vec<Record>,
    /// Opaque token for the next page, `None` when exhausted
    pub next_page_token: Option<String>,
}

/// One batched mutation request: ordered additions and deletions.
///
/// Atomicity of application is the provider's decision; this shape only
/// guarantees that both lists arrive in one request, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneChange {
    /// Records to add, in caller order
    pub additions: Vec<Record>,
    /// Records to delete, in caller order
    pub deletions: Vec<Record>,
}
