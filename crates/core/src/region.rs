//! Region partitioning of the listing tables.
//!
//! Every listing kind is stored twice, once per region. The client sends a
//! free-form region code; `"JPN"` and the empty string select the Japanese
//! tables and every other value falls back to the US tables. There is no
//! error path: unknown codes are US codes.

/// Region code that selects the Japanese tables.
pub const JAPAN_REGION_CODE: &str = "JPN";

/// Which region partition a request reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Jp,
    Us,
}

impl Region {
    /// Classify a client-supplied region code.
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() || code == JAPAN_REGION_CODE {
            Region::Jp
        } else {
            Region::Us
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Jp => "jp",
            Region::Us => "us",
        }
    }
}

/// The two kinds of listing the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Game,
    Contest,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingKind::Game => "game",
            ListingKind::Contest => "contest",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical table holding `kind` listings for `region`.
pub fn table_for(region: Region, kind: ListingKind) -> &'static str {
    match (kind, region) {
        (ListingKind::Game, Region::Jp) => "games_jp",
        (ListingKind::Game, Region::Us) => "games_us",
        (ListingKind::Contest, Region::Jp) => "contests_jp",
        (ListingKind::Contest, Region::Us) => "contests_us",
    }
}

/// Resolve a raw region code straight to a table name.
pub fn resolve_table(region_code: &str, kind: ListingKind) -> &'static str {
    table_for(Region::from_code(region_code), kind)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
