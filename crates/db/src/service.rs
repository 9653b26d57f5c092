//! Listing query facade.
//!
//! Resolves the region table, builds the query, runs it through the
//! injected [`ListingStore`] and maps every row. Store errors are returned
//! as-is; a single bad row fails the whole request.

use std::sync::Arc;

use fes_core::listing::ListingQuery;
use fes_core::region::{resolve_table, ListingKind, Region};
use fes_core::types::DbId;
use indexmap::IndexMap;

use crate::error::StoreError;
use crate::models::contest::ContestListing;
use crate::models::game::GameListing;
use crate::query::{assemble_game_query, contest_list_query, exists_query};
use crate::store::ListingStore;

/// Records keyed by their position in the result set (`"0"`, `"1"`, ...).
pub type Listings<T> = IndexMap<String, T>;

/// Key records by ordinal position, preserving result order.
pub fn index_by_position<T>(records: impl IntoIterator<Item = T>) -> Listings<T> {
    records
        .into_iter()
        .enumerate()
        .map(|(pos, record)| (pos.to_string(), record))
        .collect()
}

/// Read-only access to game and contest listings.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn ListingStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// List games in `region`, shaped by `query`.
    pub async fn list_games(
        &self,
        region: &str,
        query: &ListingQuery,
    ) -> Result<Listings<GameListing>, StoreError> {
        let table = resolve_table(region, ListingKind::Game);
        let region = Region::from_code(region);
        let sql = assemble_game_query(table, query);
        tracing::debug!(
            region = region.as_str(),
            table,
            sql = %sql.sql,
            binds = ?sql.binds,
            "Listing games"
        );

        let rows = self.store.fetch_games(&sql).await?;
        tracing::debug!(table, rows = rows.len(), "Fetched game rows");
        Ok(index_by_position(rows.into_iter().map(GameListing::from)))
    }

    /// List every contest in `region`.
    pub async fn list_contests(&self, region: &str) -> Result<Listings<ContestListing>, StoreError> {
        let table = resolve_table(region, ListingKind::Contest);
        let region = Region::from_code(region);
        let sql = contest_list_query(table);
        tracing::debug!(region = region.as_str(), table, sql = %sql.sql, "Listing contests");

        let rows = self.store.fetch_contests(&sql).await?;
        Ok(index_by_position(rows.into_iter().map(ContestListing::from)))
    }

    /// Whether a game with `sid` exists in `region`.
    pub async fn exists_public_game(&self, sid: DbId, region: &str) -> Result<bool, StoreError> {
        let table = resolve_table(region, ListingKind::Game);
        let region = Region::from_code(region);
        let sql = exists_query(table, sid);
        tracing::debug!(region = region.as_str(), table, sid, "Checking game existence");

        let count = self.store.fetch_count(&sql).await?;
        Ok(count != 0)
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use fes_core::listing::{FilterColumn, FilterSpec, PageSpec};

    use super::*;
    use crate::models::contest::tests::sample_row as contest_row;
    use crate::models::contest::ContestRow;
    use crate::models::game::tests::sample_row as game_row;
    use crate::models::game::GameRow;
    use crate::query::{BindValue, SqlQuery};

    /// In-memory store that records every query it is asked to run.
    #[derive(Default)]
    struct FakeStore {
        games: Vec<GameRow>,
        contests: Vec<ContestRow>,
        /// Game ids per table, for existence checks.
        ids: Vec<(&'static str, DbId)>,
        fail: bool,
        seen: Mutex<Vec<SqlQuery>>,
    }

    impl FakeStore {
        fn record(&self, query: &SqlQuery) -> Result<(), StoreError> {
            self.seen.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(StoreError::Connectivity(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }

        fn last_query(&self) -> SqlQuery {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ListingStore for FakeStore {
        async fn fetch_games(&self, query: &SqlQuery) -> Result<Vec<GameRow>, StoreError> {
            self.record(query)?;
            Ok(self.games.clone())
        }

        async fn fetch_contests(&self, query: &SqlQuery) -> Result<Vec<ContestRow>, StoreError> {
            self.record(query)?;
            Ok(self.contests.clone())
        }

        async fn fetch_count(&self, query: &SqlQuery) -> Result<i64, StoreError> {
            self.record(query)?;
            let sid = match query.binds.as_slice() {
                [BindValue::Int(sid)] => *sid,
                other => panic!("unexpected binds {other:?}"),
            };
            let count = self
                .ids
                .iter()
                .filter(|(table, id)| query.sql.contains(table) && *id == sid)
                .count();
            Ok(count as i64)
        }

        async fn ping(&self) -> Result<(), StoreError> {
            self.record(&SqlQuery {
                sql: "SELECT 1".into(),
                binds: Vec::new(),
            })
        }
    }

    fn service(store: &Arc<FakeStore>) -> ListingService {
        ListingService::new(Arc::clone(store) as Arc<dyn ListingStore>)
    }

    #[tokio::test]
    async fn list_games_keys_records_by_position() {
        let store = Arc::new(FakeStore {
            games: vec![game_row(300), game_row(100), game_row(200)],
            ..Default::default()
        });

        let games = service(&store)
            .list_games("JPN", &ListingQuery::default())
            .await
            .unwrap();

        let keys: Vec<_> = games.keys().cloned().collect();
        assert_eq!(keys, vec!["0", "1", "2"]);
        assert_eq!(games["0"].sid, "300");
        assert_eq!(games["2"].sid, "200");
        assert_eq!(store.last_query().sql, "SELECT * FROM games_jp");
    }

    #[tokio::test]
    async fn list_games_uses_region_table_and_filters() {
        let store = Arc::new(FakeStore::default());
        let query = ListingQuery {
            filter: Some(FilterSpec {
                column: FilterColumn::Title,
                keyword: "rpg".into(),
            }),
            contest: 5,
            page: PageSpec {
                count: 0,
                offset: 5,
            },
            ..Default::default()
        };

        let games = service(&store).list_games("USA", &query).await.unwrap();

        assert!(games.is_empty());
        let sql = store.last_query();
        assert_eq!(sql.sql, "SELECT * FROM games_us WHERE title LIKE CONCAT('%', ?, '%')");
        assert_eq!(sql.binds, vec![BindValue::Text("rpg".into())]);
    }

    #[tokio::test]
    async fn list_contests_returns_full_table() {
        let store = Arc::new(FakeStore {
            contests: vec![contest_row(1), contest_row(2)],
            ..Default::default()
        });

        let contests = service(&store).list_contests("").await.unwrap();

        assert_eq!(contests.len(), 2);
        assert_eq!(contests["1"].id, "2");
        assert_eq!(store.last_query().sql, "SELECT * FROM contests_jp");
    }

    #[tokio::test]
    async fn exists_checks_the_resolved_table() {
        let store = Arc::new(FakeStore {
            ids: vec![("games_jp", 10), ("games_us", 20)],
            ..Default::default()
        });
        let svc = service(&store);

        assert!(svc.exists_public_game(10, "JPN").await.unwrap());
        assert!(!svc.exists_public_game(10, "USA").await.unwrap());
        assert!(svc.exists_public_game(20, "USA").await.unwrap());
        assert!(!svc.exists_public_game(99, "").await.unwrap());
    }

    #[tokio::test]
    async fn store_errors_propagate_unchanged() {
        let store = Arc::new(FakeStore {
            games: vec![game_row(1)],
            fail: true,
            ..Default::default()
        });
        let svc = service(&store);

        assert_matches!(
            svc.list_games("", &ListingQuery::default()).await,
            Err(StoreError::Connectivity(sqlx::Error::PoolTimedOut))
        );
        assert_matches!(svc.list_contests("").await, Err(StoreError::Connectivity(_)));
        assert_matches!(svc.exists_public_game(1, "").await, Err(StoreError::Connectivity(_)));
        assert_matches!(svc.health_check().await, Err(StoreError::Connectivity(_)));
    }

    #[test]
    fn positional_keys_ignore_record_identity() {
        let keyed = index_by_position(["c", "a", "b"]);
        assert_eq!(
            keyed.into_iter().collect::<Vec<_>>(),
            vec![
                ("0".to_string(), "c"),
                ("1".to_string(), "a"),
                ("2".to_string(), "b"),
            ]
        );
    }
}
