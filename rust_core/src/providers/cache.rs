//! Single-slot time-to-live cache for fetched state.

use parking_lot::RwLock;
use std::time::{Duration, Instant};

/// Holds one value until it is older than the TTL.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The cached value if it is still fresh
    pub fn get(&self) -> Option<T> {
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, value)| value.clone())
    }

    pub fn put(&self, value: T) {
        *self.slot.write() = Some((Instant::now(), value));
    }

    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
