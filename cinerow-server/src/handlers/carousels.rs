use axum::{Json, extract::State};

use cinerow_model::CarouselData;

use crate::infra::{app_state::AppState, errors::AppResult};

/// `GET /api/carousels`
///
/// The declarative carousel definitions the home page builds its content
/// rows from.
pub async fn carousels_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CarouselData>>> {
    Ok(Json(state.catalog.carousels().to_vec()))
}
