//! Handlers for game and contest listing endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use fes_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{GameListParams, RegionParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Existence check payload.
#[derive(Debug, Serialize)]
pub struct PublicStatus {
    pub public: bool,
}

/// Unwrap query params, turning deserialization failures into a JSON 400.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /games
///
/// Filtered, sorted, paginated game listings for a region.
pub async fn list_games(
    State(state): State<AppState>,
    query: Result<Query<GameListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = query_params(query)?;
    let games = state
        .listings
        .list_games(&params.region, &params.to_listing_query())
        .await?;

    Ok(Json(DataResponse { data: games }))
}

/// GET /contests
///
/// Every contest for a region.
pub async fn list_contests(
    State(state): State<AppState>,
    query: Result<Query<RegionParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = query_params(query)?;
    let contests = state.listings.list_contests(&params.region).await?;

    Ok(Json(DataResponse { data: contests }))
}

/// GET /games/{sid}/public
///
/// Whether the game exists in the region's table.
pub async fn get_game_public(
    State(state): State<AppState>,
    Path(sid): Path<DbId>,
    query: Result<Query<RegionParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = query_params(query)?;
    let public = state.listings.exists_public_game(sid, &params.region).await?;

    Ok(Json(DataResponse {
        data: PublicStatus { public },
    }))
}
