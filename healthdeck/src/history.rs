//! Fixed-capacity sliding windows of health samples, one per connection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::types::Health;

/// FIFO window of the last `cap` samples. A fresh buffer is already full of
/// default/Unknown samples, so charts draw a flat "unknown" line immediately
/// instead of a sparse series.
pub struct HistoryBuffer {
    samples: VecDeque<Health>,
    cap: usize,
}

impl HistoryBuffer {
    /// Panics on a zero capacity; the registry layer never hands one out.
    pub fn new(cap: usize) -> Self {
        assert!(cap >= 1, "history capacity must be at least 1");
        let samples = (0..cap).map(|_| Health::default()).collect();
        HistoryBuffer { samples, cap }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Append one sample, evicting the oldest. Length stays exactly `cap`.
    pub fn append(&mut self, sample: Health) {
        if self.samples.len() == self.cap {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Snapshot of the window, oldest first. Always `cap` entries.
    pub fn series(&self) -> Vec<Health> {
        self.samples.iter().cloned().collect()
    }
}

/// Handle shared between one poller task and the render loop. Readers clone a
/// snapshot under the lock and never observe a half-applied append.
pub type SharedHistory = Arc<Mutex<HistoryBuffer>>;

pub fn shared(cap: usize) -> SharedHistory {
    Arc::new(Mutex::new(HistoryBuffer::new(cap)))
}

/// Snapshot helper for render code.
pub fn snapshot(history: &SharedHistory) -> Vec<Health> {
    history.lock().expect("history lock").series()
}
