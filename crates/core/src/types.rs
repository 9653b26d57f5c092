/// Listing ids (`sid`, contest `id`) are plain SQL integers.
pub type DbId = i64;

/// Stored timestamps are zone-less `DATETIME` values.
pub type Timestamp = chrono::NaiveDateTime;
