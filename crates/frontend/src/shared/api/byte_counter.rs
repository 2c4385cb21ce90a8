use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Session-wide tally of HTTP traffic. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ByteCounter {
    sent: Arc<AtomicU64>,
    received: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteStats {
    pub sent: u64,
    pub received: u64,
    pub total: u64,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sent(&self, bytes: u64) {
        self.sent.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn add_received(&self, bytes: u64) {
        self.received.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.sent() + self.received()
    }

    pub fn reset(&self) {
        self.sent.store(0, Ordering::Relaxed);
        self.received.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ByteStats {
        let sent = self.sent();
        let received = self.received();
        ByteStats {
            sent,
            received,
            total: sent + received,
        }
    }
}
