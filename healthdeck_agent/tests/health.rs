//! Collection-layer tests that run against the real local machine: the hot
//! cache and the shape of what the handler would serve. No assertions on
//! specific states, since those depend on the host.

use sysinfo::{Components, CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use healthdeck_agent::health::current_health;
use healthdeck_agent::state::AppState;

fn test_state() -> AppState {
    let refresh_kind = RefreshKind::nothing()
        .with_cpu(CpuRefreshKind::everything())
        .with_memory(MemoryRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh_kind);
    sys.refresh_memory();
    let mut components = Components::new();
    components.refresh(true);
    AppState::new(sys, components)
}

#[tokio::test]
async fn repeated_requests_within_a_second_serve_the_cached_sample() {
    let state = test_state();
    let first = current_health(&state).await;
    let second = current_health(&state).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn collected_memory_reading_is_consistent() {
    let state = test_state();
    let health = current_health(&state).await;
    let mem = &health.memory.value;
    assert!(mem.total > 0);
    assert!(mem.used <= mem.total);
}
