//! Query-shaping parameters for game listings.
//!
//! Column and direction names are closed enums: they are the only pieces of
//! a listing query that get concatenated into SQL text, so they must never
//! carry client-supplied strings.

use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// `contest` value meaning "no contest filter".
pub const NO_CONTEST: DbId = 0;

/// `award` value meaning "no award filter". Award id 0 is a real award.
pub const NO_AWARD: DbId = -1;

/// `famer` value meaning "no hall-of-fame filter".
pub const NO_FAMER: DbId = 0;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Columns a keyword filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Title,
    Uname,
    Suid,
    Password,
}

impl FilterColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            FilterColumn::Title => "title",
            FilterColumn::Uname => "uname",
            FilterColumn::Suid => "suid",
            FilterColumn::Password => "password",
        }
    }

    /// Password lookups compare exactly so a partial password never matches.
    pub fn is_exact_match(self) -> bool {
        matches!(self, FilterColumn::Password)
    }
}

impl FromStr for FilterColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FilterColumn::Title),
            "uname" => Ok(FilterColumn::Uname),
            "suid" => Ok(FilterColumn::Suid),
            "password" => Ok(FilterColumn::Password),
            other => Err(CoreError::Validation(format!(
                "unknown filter '{other}', expected one of: title, uname, suid, password"
            ))),
        }
    }
}

/// A keyword filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: FilterColumn,
    pub keyword: String,
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Updt,
    DlCount,
    ReviewAve,
}

impl SortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Updt => "updt",
            SortColumn::DlCount => "dlcount",
            SortColumn::ReviewAve => "reviewave",
        }
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updt" => Ok(SortColumn::Updt),
            "dlcount" => Ok(SortColumn::DlCount),
            "reviewave" => Ok(SortColumn::ReviewAve),
            other => Err(CoreError::Validation(format!(
                "unknown sort '{other}', expected one of: updt, dlcount, reviewave"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::Validation(format!(
                "unknown direction '{other}', expected asc or desc"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// Row window. A non-positive `count` means "no limit", and `offset` is
/// ignored unless a limit is in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSpec {
    pub count: i64,
    pub offset: i64,
}

// ---------------------------------------------------------------------------
// Full query bundle
// ---------------------------------------------------------------------------

/// Every knob a game listing request can turn.
///
/// Several filters may be set at once; the query builder picks one of them
/// by precedence (keyword, contest, award, famer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: Option<FilterSpec>,
    pub contest: DbId,
    pub award: DbId,
    pub famer: DbId,
    pub sort: Option<SortSpec>,
    pub page: PageSpec,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filter: None,
            contest: NO_CONTEST,
            award: NO_AWARD,
            famer: NO_FAMER,
            sort: None,
            page: PageSpec::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
