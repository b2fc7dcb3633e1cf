//! HTTP surface: one JSON health endpoint at the root path.

use axum::{extract::State, Json};

use crate::health::current_health;
use crate::state::AppState;
use crate::types::Health;

pub async fn health_handler(State(state): State<AppState>) -> Json<Health> {
    Json(current_health(&state).await)
}
