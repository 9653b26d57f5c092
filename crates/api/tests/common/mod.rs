#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fes_api::config::ServerConfig;
use fes_api::router::build_app_router;
use fes_api::state::AppState;
use fes_core::types::{DbId, Timestamp};
use fes_db::error::StoreError;
use fes_db::models::contest::ContestRow;
use fes_db::models::game::GameRow;
use fes_db::query::SqlQuery;
use fes_db::service::ListingService;
use fes_db::store::ListingStore;

/// How the fake store should fail, if at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Failure {
    #[default]
    None,
    Connectivity,
    Decode,
}

/// In-memory listing store that returns canned rows and records queries.
#[derive(Default)]
pub struct FakeStore {
    pub games: Vec<GameRow>,
    pub contests: Vec<ContestRow>,
    pub count: i64,
    pub failure: Failure,
    pub seen: Mutex<Vec<SqlQuery>>,
}

impl FakeStore {
    fn run(&self, query: &SqlQuery) -> Result<(), StoreError> {
        self.seen.lock().unwrap().push(query.clone());
        match self.failure {
            Failure::None => Ok(()),
            Failure::Connectivity => Err(StoreError::Connectivity(sqlx::Error::PoolTimedOut)),
            Failure::Decode => Err(StoreError::Decode {
                kind: fes_core::region::ListingKind::Game,
                source: sqlx::Error::ColumnNotFound("genre".into()),
            }),
        }
    }

    pub fn last_query(&self) -> SqlQuery {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no query was run")
    }
}

#[async_trait]
impl ListingStore for FakeStore {
    async fn fetch_games(&self, query: &SqlQuery) -> Result<Vec<GameRow>, StoreError> {
        self.run(query)?;
        Ok(self.games.clone())
    }

    async fn fetch_contests(&self, query: &SqlQuery) -> Result<Vec<ContestRow>, StoreError> {
        self.run(query)?;
        Ok(self.contests.clone())
    }

    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64, StoreError> {
        self.run(query)?;
        Ok(self.count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.run(&SqlQuery {
            sql: "SELECT 1".into(),
            binds: Vec::new(),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router around the given fake store.
pub fn build_test_app(store: Arc<FakeStore>) -> Router {
    let state = AppState {
        listings: ListingService::new(store),
    };
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn timestamp(y: i32, m: u32, d: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn game_row(sid: DbId, title: &[u8], genre: &str) -> GameRow {
    GameRow {
        sid,
        suid: 1000 + sid,
        title: title.to_vec(),
        uname: b"maru".to_vec(),
        password: "pw".to_string(),
        updt: timestamp(2023, 3, 14),
        datablocksize: 512,
        version: 1,
        packageversion: 1,
        reviewave: 3.0,
        lang: "en".to_string(),
        edit: 0,
        attribute: 0,
        award: -1,
        famer: 0,
        comment: Vec::new(),
        contest: 0,
        owner: 1,
        genre: genre.to_string(),
        dlcount: 5,
    }
}

pub fn contest_row(id: DbId, name: &str) -> ContestRow {
    ContestRow {
        id,
        name: name.as_bytes().to_vec(),
        apply_start: timestamp(2023, 7, 1),
        apply_end: timestamp(2023, 7, 10),
        review_start: timestamp(2023, 7, 11),
        review_end: timestamp(2023, 7, 20),
        exc_start: timestamp(2023, 7, 21),
        exc_end: timestamp(2023, 7, 31),
    }
}
