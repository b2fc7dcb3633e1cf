//! Shared agent state: sysinfo handles, the rolling CPU load, and the hot
//! response cache.

use std::sync::Arc;
use std::time::Instant;

use sysinfo::{Components, System};
use tokio::sync::{Mutex, RwLock};

use crate::types::{Health, HealthValue};

pub type SharedSystem = Arc<Mutex<System>>;
pub type SharedComponents = Arc<Mutex<Components>>;

#[derive(Clone)]
pub struct AppState {
    // Persistent sysinfo handles
    pub sys: SharedSystem,
    pub components: SharedComponents,

    /// Rolling CPU load fraction maintained by the background sampler.
    pub cpu_load: Arc<RwLock<HealthValue<f32>>>,

    /// Last served sample; refreshed at most once per second.
    pub cached: Arc<Mutex<Option<(Instant, Health)>>>,
}

impl AppState {
    pub fn new(sys: System, components: Components) -> Self {
        AppState {
            sys: Arc::new(Mutex::new(sys)),
            components: Arc::new(Mutex::new(components)),
            cpu_load: Arc::new(RwLock::new(HealthValue::default())),
            cached: Arc::new(Mutex::new(None)),
        }
    }
}
