use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use cypherchat_types::{QueryRequest, QueryResponse};
use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Answer a natural-language question against the graph
/// 
/// The body is validated before any external call. A database failure is
/// still a 200 carrying `{error, cypher_query}`; only model failures yield 5xx.
pub async fn query_db(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> ApiResult<Json<QueryResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    
    tracing::info!(
        prompt = %request.prompt,
        history_turns = request.history.len(),
        "Received query request"
    );
    
    let response = state.pipeline.run(&request).await?;
    
    Ok(Json(response))
}
