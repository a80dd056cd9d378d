use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::info;

use cinerow_model::SearchResponse;

use crate::catalog::filter_movies;
use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// `GET /api/search?query=...`
///
/// Case-insensitive substring match over movie titles. A missing or blank
/// query returns an empty result immediately, without filtering and
/// without the artificial latency; everything else responds after the
/// configured delay so the client's loading state is visible.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let query = params.query.unwrap_or_default();
    let query = query.trim();

    if query.is_empty() {
        return Ok(Json(SearchResponse::default()));
    }

    let movies = filter_movies(state.catalog.movies(), query);
    info!(query, results = movies.len(), "search");

    tokio::time::sleep(state.search_latency).await;

    Ok(Json(SearchResponse { movies }))
}
