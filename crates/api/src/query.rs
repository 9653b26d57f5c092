//! Query parameter types for the listing endpoints.
//!
//! Column and direction names are parsed into the closed enums from
//! `fes_core::listing` here, so an unknown `sort` or `direction` is a 400
//! and never reaches SQL assembly. Empty values (`?filter=`) count as absent,
//! which is what older clients send.

use std::fmt::Display;
use std::str::FromStr;

use fes_core::listing::{
    FilterColumn, FilterSpec, ListingQuery, PageSpec, SortColumn, SortDirection, SortSpec,
    NO_AWARD, NO_CONTEST, NO_FAMER,
};
use fes_core::types::DbId;
use serde::{de, Deserialize, Deserializer};

/// `?region=` only.
#[derive(Debug, Default, Deserialize)]
pub struct RegionParams {
    #[serde(default)]
    pub region: String,
}

/// Query parameters for `GET /games`.
#[derive(Debug, Deserialize)]
pub struct GameListParams {
    #[serde(default)]
    pub region: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub filter: Option<FilterColumn>,
    #[serde(default)]
    pub keyword: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<SortColumn>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub direction: Option<SortDirection>,
    #[serde(default = "no_contest")]
    pub contest: DbId,
    #[serde(default = "no_award")]
    pub award: DbId,
    #[serde(default = "no_famer")]
    pub famer: DbId,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub offset: i64,
}

impl GameListParams {
    pub fn to_listing_query(&self) -> ListingQuery {
        ListingQuery {
            filter: self.filter.map(|column| FilterSpec {
                column,
                keyword: self.keyword.clone(),
            }),
            contest: self.contest,
            award: self.award,
            famer: self.famer,
            sort: self.sort.map(|column| SortSpec {
                column,
                direction: self.direction.unwrap_or_default(),
            }),
            page: PageSpec {
                count: self.count,
                offset: self.offset,
            },
        }
    }
}

fn no_contest() -> DbId {
    NO_CONTEST
}

fn no_award() -> DbId {
    NO_AWARD
}

fn no_famer() -> DbId {
    NO_FAMER
}

/// Deserialize an optional `FromStr` value, treating `""` as `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
