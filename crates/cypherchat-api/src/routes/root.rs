use axum::{extract::State, Json};
use cypherchat_types::RootResponse;
use std::sync::Arc;

use crate::state::AppState;

/// Readiness message; performs no dependency checks
pub async fn root(
    State(state): State<Arc<AppState>>,
) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.config.app.ready_message.clone(),
    })
}
