use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::CorsConfig,
    middleware::logging,
    routes::{query, root},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/query", post(query::query_db))
        .layer(middleware::from_fn(logging::log_request))
        .layer(build_cors_layer(&state.config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One allowed origin with credentials; any method and request header.
///
/// Wildcards are not valid together with credentials, so methods and headers
/// mirror the preflight request instead.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);
    
    match config.origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(AllowOrigin::list([origin])),
        Err(_) => {
            tracing::warn!(origin = %config.origin, "Invalid CORS origin, cross-origin requests disabled");
            cors
        }
    }
}
