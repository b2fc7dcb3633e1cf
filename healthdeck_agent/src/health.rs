//! Health collection and per-metric classification.

use std::time::{Duration, Instant};

use sysinfo::{Components, System};
use tracing::{debug, warn};

use crate::state::AppState;
use crate::types::{Health, HealthState, HealthValue, MemoryUsage};

const MEM_FREE_CRITICAL: u64 = 256 * 1024 * 1024;
const MEM_FREE_UNHEALTHY: u64 = 512 * 1024 * 1024;
const CPU_TEMP_CRITICAL: f32 = 90.0;
const CPU_TEMP_UNHEALTHY: f32 = 70.0;
const CPU_LOAD_CRITICAL: f32 = 0.999;
const CPU_LOAD_UNHEALTHY: f32 = 0.7;

/// Responses are served from the last collection when it is younger than this.
const CACHE_TTL: Duration = Duration::from_secs(1);

/// Current machine health, collected at most once per `CACHE_TTL`.
pub async fn current_health(state: &AppState) -> Health {
    {
        let cached = state.cached.lock().await;
        if let Some((at, health)) = cached.as_ref() {
            if at.elapsed() < CACHE_TTL {
                return health.clone();
            }
        }
    }

    let health = collect_health(state).await;
    debug!("collected health, overall {:?}", health.overall);
    *state.cached.lock().await = Some((Instant::now(), health.clone()));
    health
}

async fn collect_health(state: &AppState) -> Health {
    let memory = memory_state(&mut *state.sys.lock().await);
    let cpu_temperature = cpu_temperature_state(&mut *state.components.lock().await);
    let cpu_usage = state.cpu_load.read().await.clone();
    Health::from_states(memory, cpu_temperature, cpu_usage)
}

fn memory_state(sys: &mut System) -> HealthValue<MemoryUsage> {
    sys.refresh_memory();
    let total = sys.total_memory();
    let used = sys.used_memory();
    HealthValue {
        state: classify_free_memory(total.saturating_sub(used)),
        value: MemoryUsage { total, used },
        message: String::new(),
    }
}

pub fn classify_free_memory(free: u64) -> HealthState {
    if free < MEM_FREE_CRITICAL {
        HealthState::Critical
    } else if free < MEM_FREE_UNHEALTHY {
        HealthState::Unhealthy
    } else {
        HealthState::Ok
    }
}

fn cpu_temperature_state(components: &mut Components) -> HealthValue<f32> {
    components.refresh(true);
    match best_cpu_temp(components) {
        Some(temp) => HealthValue {
            state: classify_cpu_temp(temp),
            value: temp,
            message: String::new(),
        },
        None => {
            warn!("no CPU temperature sensor found");
            HealthValue::critical("no CPU temperature sensor".into())
        }
    }
}

pub fn classify_cpu_temp(temp: f32) -> HealthState {
    if temp > CPU_TEMP_CRITICAL {
        HealthState::Critical
    } else if temp > CPU_TEMP_UNHEALTHY {
        HealthState::Unhealthy
    } else {
        HealthState::Ok
    }
}

/// `load` is a [0,1] fraction of total CPU time in use.
pub fn classify_cpu_load(load: f32) -> HealthState {
    if load > CPU_LOAD_CRITICAL {
        HealthState::Critical
    } else if load > CPU_LOAD_UNHEALTHY {
        HealthState::Unhealthy
    } else {
        HealthState::Ok
    }
}

fn best_cpu_temp(components: &Components) -> Option<f32> {
    components
        .iter()
        .filter(|c| {
            let label = c.label().to_lowercase();
            label.contains("cpu")
                || label.contains("package")
                || label.contains("tctl")
                || label.contains("tdie")
        })
        .filter_map(|c| c.temperature())
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}
