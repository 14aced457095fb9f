//! Token-bucket rate limiter for zone refreshes
//!
//! Capacity 1, fixed refill interval. State is only the instant of the
//! last allowed consumption; the bucket is purely time-based and is not
//! affected by cancellation of the operation it gated.

use std::time::{Duration, Instant};

/// Single-token bucket with a fixed refill interval.
#[derive(Debug)]
pub(crate) struct TokenBucket {
    refill_interval: Duration,
    last_consumed: Option<Instant>,
}

impl TokenBucket {
    pub(crate) fn new(refill_interval: Duration) -> Self {
        Self {
            refill_interval,
            last_consumed: None,
        }
    }

    /// Whether a token is available at `now`, without consuming it.
    pub(crate) fn is_ready(&self, now: Instant) -> bool {
        match self.last_consumed {
            None => true,
            Some(last) => now.duration_since(last) >= self.refill_interval,
        }
    }

    /// Consume the token if available. Non-blocking.
    pub(crate) fn try_consume(&mut self, now: Instant) -> bool {
        if self.is_ready(now) {
            self.last_consumed = Some(now);
            true
        } else {
            false
        }
    }
}
