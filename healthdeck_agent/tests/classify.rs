//! Threshold tests for per-metric classification.

use healthdeck_agent::health::{classify_cpu_load, classify_cpu_temp, classify_free_memory};
use healthdeck_agent::types::HealthState;

const MIB: u64 = 1024 * 1024;

#[test]
fn free_memory_thresholds() {
    assert_eq!(classify_free_memory(0), HealthState::Critical);
    assert_eq!(classify_free_memory(255 * MIB), HealthState::Critical);
    assert_eq!(classify_free_memory(256 * MIB), HealthState::Unhealthy);
    assert_eq!(classify_free_memory(511 * MIB), HealthState::Unhealthy);
    assert_eq!(classify_free_memory(512 * MIB), HealthState::Ok);
    assert_eq!(classify_free_memory(8192 * MIB), HealthState::Ok);
}

#[test]
fn cpu_temperature_thresholds() {
    assert_eq!(classify_cpu_temp(35.0), HealthState::Ok);
    assert_eq!(classify_cpu_temp(70.0), HealthState::Ok);
    assert_eq!(classify_cpu_temp(70.1), HealthState::Unhealthy);
    assert_eq!(classify_cpu_temp(90.0), HealthState::Unhealthy);
    assert_eq!(classify_cpu_temp(90.1), HealthState::Critical);
}

#[test]
fn cpu_load_thresholds() {
    assert_eq!(classify_cpu_load(0.0), HealthState::Ok);
    assert_eq!(classify_cpu_load(0.7), HealthState::Ok);
    assert_eq!(classify_cpu_load(0.71), HealthState::Unhealthy);
    assert_eq!(classify_cpu_load(0.999), HealthState::Unhealthy);
    assert_eq!(classify_cpu_load(1.0), HealthState::Critical);
}
