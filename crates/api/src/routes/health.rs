//! `GET /health`, mounted at the root rather than under `/api/v1`.
//!
//! Always answers 200; a store that cannot be reached is reported as
//! `"degraded"` so load balancers can tell a slow database from a dead process.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.listings.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Listing store failed the health ping");
            false
        }
    };
    Json(HealthResponse::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_store_is_degraded() {
        let report = HealthResponse::new(false);
        assert_eq!(report.status, "degraded");
        assert!(!report.db_healthy);
        assert_eq!(HealthResponse::new(true).status, "ok");
    }
}
