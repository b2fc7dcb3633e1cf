//! Background CPU sampler: keeps a rolling load fraction so requests never
//! have to wait out the measurement interval.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::health::classify_cpu_load;
use crate::state::AppState;
use crate::types::HealthValue;

pub const SAMPLE_PERIOD: Duration = Duration::from_secs(1);

pub fn spawn_cpu_sampler(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        // usage is a delta between refreshes; prime the first measurement
        state.sys.lock().await.refresh_cpu_usage();
        loop {
            sleep(period).await;
            let load = {
                let mut sys = state.sys.lock().await;
                sys.refresh_cpu_usage();
                sys.global_cpu_usage() / 100.0
            };
            debug!("sampled cpu load {load:.3}");
            *state.cpu_load.write().await = HealthValue {
                state: classify_cpu_load(load),
                value: load,
                message: String::new(),
            };
        }
    })
}
