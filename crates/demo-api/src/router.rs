use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{require_api_client, require_session};
use crate::state::AppState;

/// Build the application router.
///
/// `/api/session` sits behind HTTP Basic (API clients); `/api/items` behind an
/// active session. Unmatched paths get a JSON 404.
pub fn build_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route(
            "/api/session",
            post(handlers::session::login).delete(handlers::session::logout),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_client));

    let protected_routes = Router::new()
        .route("/api/items", get(handlers::items::list_items))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(session_routes)
        .merge(protected_routes)
        .fallback(handlers::not_found)
        .with_state(state)
        // Default span only: request headers carry credentials.
        .layer(TraceLayer::new_for_http())
}
