pub mod health;
pub mod listing;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /games?region&filter&keyword&sort&direction&contest&award&famer&count&offset
/// /games/{sid}/public?region
/// /contests?region
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(listing::router())
}
