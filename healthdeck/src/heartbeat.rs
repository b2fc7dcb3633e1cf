//! Process-wide tick broadcast. All poll scheduling derives from this one
//! clock; no poller runs its own timer.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Nominal spacing between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single owned timer task publishing an incrementing tick over a watch
/// channel. Subscribing never spawns anything, so exactly one timer exists no
/// matter how many subscribers come and go. Slow subscribers simply observe
/// the latest tick on their next read.
pub struct Heartbeat {
    rx: watch::Receiver<u64>,
    timer: JoinHandle<()>,
}

impl Heartbeat {
    pub fn start() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Same machinery on a configurable cadence (tests run it fast).
    pub fn with_period(period: Duration) -> Self {
        let (tx, rx) = watch::channel(0u64);
        let timer = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first interval tick completes immediately; tick 0 is the
            // channel's initial value, so consume it before counting
            interval.tick().await;
            let mut tick = 0u64;
            loop {
                interval.tick().await;
                tick += 1;
                if tx.send(tick).is_err() {
                    break;
                }
            }
        });
        Heartbeat { rx, timer }
    }

    /// Broadcast handle for one subscriber. Receivers see the latest tick
    /// value; there is no per-subscriber queue or backpressure.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }

    pub fn current(&self) -> u64 {
        *self.rx.borrow()
    }

    /// Cancel the timer task. Idempotent; subscribers observe the channel
    /// closing on their next wait.
    pub fn shutdown(&self) {
        self.timer.abort();
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
