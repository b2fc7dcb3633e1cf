//! Types that mirror the agent's JSON schema, plus the severity tiers used
//! for card styling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HealthState {
    Ok,
    Unhealthy,
    Critical,
    #[default]
    Unknown,
}

/// A single observed metric with its own classification and message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthValue<T> {
    pub state: HealthState,
    pub value: T,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
}

/// One poll outcome: a parsed endpoint response, or a synthesized failure.
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
    /// Fallback sample recorded when a poll fails or times out. Everything is
    /// default/Unknown except the overall state, so an unreachable endpoint
    /// reads as Critical rather than merely stale.
    pub fn critical() -> Self {
        Health {
            overall: HealthState::Critical,
            ..Health::default()
        }
    }

    pub fn severity(&self) -> Severity {
        self.overall.into()
    }
}

/// Presentation tier for a health state. Total mapping: Unknown is a valid
/// tier of its own, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Danger,
    Unknown,
}

impl From<HealthState> for Severity {
    fn from(state: HealthState) -> Self {
        match state {
            HealthState::Ok => Severity::Ok,
            HealthState::Unhealthy => Severity::Warning,
            HealthState::Critical => Severity::Danger,
            HealthState::Unknown => Severity::Unknown,
        }
    }
}
