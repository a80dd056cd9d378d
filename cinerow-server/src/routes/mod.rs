use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::handlers::{carousels::carousels_handler, search::search_handler};

/// Create the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search_handler))
        .route("/api/carousels", get(carousels_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
