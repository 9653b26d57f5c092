//! Game listing rows (`games_jp`, `games_us`).

use fes_core::category::CategorySet;
use fes_core::transport::{encode_text, format_review_average, format_timestamp};
use fes_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

use super::expect_columns;

/// Number of columns in a game table.
pub const GAME_COLUMN_COUNT: usize = 20;

// ---------------------------------------------------------------------------
// Stored row
// ---------------------------------------------------------------------------

/// One row of a game table, in column order.
///
/// Free-text columns are kept as raw bytes; older rows are not guaranteed to
/// be valid UTF-8.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub sid: DbId,
    pub suid: i64,
    pub title: Vec<u8>,
    pub uname: Vec<u8>,
    pub password: String,
    pub updt: Timestamp,
    pub datablocksize: i64,
    pub version: i64,
    pub packageversion: i64,
    pub reviewave: f64,
    pub lang: String,
    pub edit: i64,
    pub attribute: i64,
    pub award: i64,
    pub famer: i64,
    pub comment: Vec<u8>,
    pub contest: i64,
    pub owner: i64,
    pub genre: String,
    pub dlcount: i64,
}

impl<'r> FromRow<'r, MySqlRow> for GameRow {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        expect_columns(row, GAME_COLUMN_COUNT)?;
        Ok(Self {
            sid: row.try_get(0)?,
            suid: row.try_get(1)?,
            title: row.try_get(2)?,
            uname: row.try_get(3)?,
            password: row.try_get(4)?,
            updt: row.try_get(5)?,
            datablocksize: row.try_get(6)?,
            version: row.try_get(7)?,
            packageversion: row.try_get(8)?,
            reviewave: row.try_get(9)?,
            lang: row.try_get(10)?,
            edit: row.try_get(11)?,
            attribute: row.try_get(12)?,
            award: row.try_get(13)?,
            famer: row.try_get(14)?,
            comment: row.try_get(15)?,
            contest: row.try_get(16)?,
            owner: row.try_get(17)?,
            genre: row.try_get(18)?,
            dlcount: row.try_get(19)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire record
// ---------------------------------------------------------------------------

/// A game listing as sent to clients.
///
/// Integers are decimal text, `title`/`uname`/`comment` are base64, and each
/// set genre appears as its own `genreN: "1"` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameListing {
    pub sid: String,
    pub suid: String,
    pub title: String,
    pub uname: String,
    pub password: String,
    pub updt: String,
    pub datablocksize: String,
    pub version: String,
    pub packageversion: String,
    pub reviewave: String,
    pub lang: String,
    pub edit: String,
    pub attribute: String,
    pub award: String,
    pub famer: String,
    pub comment: String,
    pub contest: String,
    pub owner: String,
    pub dlcount: String,
    #[serde(flatten)]
    pub genres: CategorySet,
}

impl From<GameRow> for GameListing {
    fn from(row: GameRow) -> Self {
        Self {
            sid: row.sid.to_string(),
            suid: row.suid.to_string(),
            title: encode_text(&row.title),
            uname: encode_text(&row.uname),
            password: row.password,
            updt: format_timestamp(&row.updt),
            datablocksize: row.datablocksize.to_string(),
            version: row.version.to_string(),
            packageversion: row.packageversion.to_string(),
            reviewave: format_review_average(row.reviewave),
            lang: row.lang,
            edit: row.edit.to_string(),
            attribute: row.attribute.to_string(),
            award: row.award.to_string(),
            famer: row.famer.to_string(),
            comment: encode_text(&row.comment),
            contest: row.contest.to_string(),
            owner: row.owner.to_string(),
            dlcount: row.dlcount.to_string(),
            genres: CategorySet::from_codes(&row.genre),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
