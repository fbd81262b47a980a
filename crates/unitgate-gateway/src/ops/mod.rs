//! Operational HTTP endpoints.
//!
//! - `/health` : liveness + configured unit count. Deliberately
//!   unauthenticated and backend-free so probes keep working when the
//!   supervisor or the caller's credentials do not.

use axum::{extract::State, Json};

use crate::app_state::AppState;
use crate::gateway::HealthResponse;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.gateway().health())
}
