//! Contest listing rows (`contests_jp`, `contests_us`).

use fes_core::transport::{encode_text, format_timestamp};
use fes_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

use super::expect_columns;

/// Number of columns in a contest table.
pub const CONTEST_COLUMN_COUNT: usize = 8;

/// One row of a contest table, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestRow {
    pub id: DbId,
    pub name: Vec<u8>,
    pub apply_start: Timestamp,
    pub apply_end: Timestamp,
    pub review_start: Timestamp,
    pub review_end: Timestamp,
    pub exc_start: Timestamp,
    pub exc_end: Timestamp,
}

impl<'r> FromRow<'r, MySqlRow> for ContestRow {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        expect_columns(row, CONTEST_COLUMN_COUNT)?;
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            apply_start: row.try_get(2)?,
            apply_end: row.try_get(3)?,
            review_start: row.try_get(4)?,
            review_end: row.try_get(5)?,
            exc_start: row.try_get(6)?,
            exc_end: row.try_get(7)?,
        })
    }
}

/// A contest as sent to clients: id as text, name as base64, and each
/// phase window as `YYYY-MM-DD HH:MM:SS` pairs.
///
/// Clients receive the apply window in the `review_*` fields as well; the
/// stored review columns are decoded but not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestListing {
    pub id: String,
    pub name: String,
    pub apply_start: String,
    pub apply_end: String,
    pub review_start: String,
    pub review_end: String,
    pub exc_start: String,
    pub exc_end: String,
}

impl From<ContestRow> for ContestListing {
    fn from(row: ContestRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: encode_text(&row.name),
            apply_start: format_timestamp(&row.apply_start),
            apply_end: format_timestamp(&row.apply_end),
            review_start: format_timestamp(&row.apply_start),
            review_end: format_timestamp(&row.apply_end),
            exc_start: format_timestamp(&row.exc_start),
            exc_end: format_timestamp(&row.exc_end),
        }
    }
}
