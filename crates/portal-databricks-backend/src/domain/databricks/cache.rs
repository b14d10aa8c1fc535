use std::time::{Duration, Instant};

/// A single, unkeyed cache entry with an absolute deadline.
///
/// The entry is only handed out while `now` is strictly before the deadline.
/// Refilling overwrites the slot wholesale.
pub(super) struct CacheSlot<T> {
    value: Option<T>,
    expires_at: Option<Instant>,
}

impl<T: Clone> CacheSlot<T> {
    pub fn empty() -> Self {
        Self { value: None, expires_at: None }
    }

    pub fn get(&self, now: Instant) -> Option<T> {
        match self.expires_at {
            Some(expires_at) if expires_at > now => self.value.clone(),
            _ => None,
        }
    }

    pub fn store(&mut self, value: T, fetched_at: Instant, ttl: Duration) {
        self.value = Some(value);
        self.expires_at = Some(fetched_at + ttl);
    }

    #[cfg(test)]
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}
