//! Per-connection poll scheduling and result normalization.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::connections::Connection;
use crate::history::{self, SharedHistory};
use crate::types::Health;

/// Hard per-request deadline, measured from request start. An attempt that
/// has not settled by then is aborted and recorded as a Critical fallback.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(900);

/// Whether `tick` is a due tick for a poller anchored at `anchor`.
/// Frequency 1 is due on every tick.
pub fn is_due(tick: u64, anchor: u64, frequency: u64) -> bool {
    tick.wrapping_sub(anchor) % frequency == 0
}

/// A running poller plus the state it feeds. Dropping the handle stops
/// scheduling; an attempt already in flight may still settle and append to
/// the orphaned buffer, which nothing observes afterwards.
pub struct PollerHandle {
    pub connection: Connection,
    pub history: SharedHistory,
    /// Latest settled sample, for card styling without re-reading the buffer.
    pub latest: watch::Receiver<Health>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start polling one connection against the shared heartbeat.
///
/// The poller's phase is anchored to the tick observed here, not tick 0, so
/// pollers created at different times stay out of phase with each other. The
/// anchor tick itself is due, so the first poll fires immediately.
pub fn spawn_poller(
    client: reqwest::Client,
    connection: Connection,
    mut ticks: watch::Receiver<u64>,
) -> PollerHandle {
    let history = history::shared(connection.cache_size);
    let (latest_tx, latest_rx) = watch::channel(Health::default());
    let latest_tx = Arc::new(latest_tx);

    let url = connection.health_url();
    let frequency = connection.poll_frequency_in_seconds;
    let task_history = Arc::clone(&history);

    let task = tokio::spawn(async move {
        let anchor = *ticks.borrow();
        loop {
            let tick = *ticks.borrow_and_update();
            if is_due(tick, anchor, frequency) {
                // Each due tick starts its own attempt. A slow attempt from an
                // earlier tick may settle after a faster later one; appends
                // land in completion order and are never reordered.
                let client = client.clone();
                let url = url.clone();
                let history = Arc::clone(&task_history);
                let latest_tx = Arc::clone(&latest_tx);
                tokio::spawn(async move {
                    let sample = fetch_sample(&client, &url, POLL_TIMEOUT).await;
                    history.lock().expect("history lock").append(sample.clone());
                    let _ = latest_tx.send(sample);
                });
            }
            if ticks.changed().await.is_err() {
                break;
            }
        }
    });

    PollerHandle {
        connection,
        history,
        latest: latest_rx,
        task,
    }
}

/// Issue one GET and normalize the outcome. Success requires a 2xx response
/// with a parseable Health body inside the deadline; everything else (network
/// error, non-2xx, malformed body, timeout) becomes the Critical fallback.
/// Failure causes are deliberately not distinguished.
pub async fn fetch_sample(client: &reqwest::Client, url: &str, deadline: Duration) -> Health {
    // explicit race: first of {response settles, deadline elapses} wins, and
    // the loser is dropped, which aborts an in-flight request
    match tokio::time::timeout(deadline, request_health(client, url)).await {
        Ok(Some(health)) => health,
        _ => Health::critical(),
    }
}

async fn request_health(client: &reqwest::Client, url: &str) -> Option<Health> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<Health>().await.ok()
}
