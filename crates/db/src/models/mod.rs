//! Listing rows and their wire records.
//!
//! Each submodule contains:
//! - A positional `FromRow` struct matching the stored table layout
//! - A `Serialize` record where every field is transport-typed text
//! - The `From` conversion between the two

use sqlx::mysql::MySqlRow;
use sqlx::Row;

pub mod contest;
pub mod game;

/// Reject rows whose column count differs from the expected table layout.
///
/// Listing tables are read with `SELECT *` and decoded by position, so an
/// added or dropped column would otherwise shift every later field.
pub(crate) fn expect_columns(row: &MySqlRow, expected: usize) -> Result<(), sqlx::Error> {
    let actual = row.len();
    if actual != expected {
        return Err(sqlx::Error::Decode(
            format!("expected {expected} columns, found {actual}").into(),
        ));
    }
    Ok(())
}
