//! Data types served to dashboards.
//! Keep this module minimal and stable — it defines the wire format.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HealthState {
    Ok,
    Unhealthy,
    Critical,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthValue<T> {
    pub state: HealthState,
    pub value: T,
    pub message: String,
}

impl<T: Default> HealthValue<T> {
    /// A metric that could not be read at all.
    pub fn critical(message: String) -> Self {
        HealthValue {
            state: HealthState::Critical,
            value: T::default(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Health {
    pub overall: HealthState,
    pub memory: HealthValue<MemoryUsage>,
    #[serde(rename = "cpuTemperature")]
    pub cpu_temperature: HealthValue<f32>,
    #[serde(rename = "cpuUsage")]
    pub cpu_usage: HealthValue<f32>,
}

impl Health {
    /// Combine per-metric states; `overall` is the worst of the three.
    pub fn from_states(
        memory: HealthValue<MemoryUsage>,
        cpu_temperature: HealthValue<f32>,
        cpu_usage: HealthValue<f32>,
    ) -> Health {
        let states = [&memory.state, &cpu_temperature.state, &cpu_usage.state];

        let overall = if states.contains(&&HealthState::Critical) {
            HealthState::Critical
        } else if states.contains(&&HealthState::Unhealthy) {
            HealthState::Unhealthy
        } else if states.contains(&&HealthState::Unknown) {
            HealthState::Unknown
        } else {
            HealthState::Ok
        };

        Health {
            overall,
            memory,
            cpu_temperature,
            cpu_usage,
        }
    }
}
