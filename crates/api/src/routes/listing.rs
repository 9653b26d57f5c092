//! Route definitions for game and contest listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::state::AppState;

/// Listing routes, mounted under `/api/v1`.
///
/// ```text
/// GET  /games                  -> list_games
/// GET  /games/{sid}/public     -> get_game_public
/// GET  /contests               -> list_contests
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(listing::list_games))
        .route("/games/{sid}/public", get(listing::get_game_public))
        .route("/contests", get(listing::list_contests))
}
