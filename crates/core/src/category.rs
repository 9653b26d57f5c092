//! Genre flags packed into the `genre` column.
//!
//! The store keeps a game's genres as a comma-separated list of codes
//! (`"3,17,34"`). Clients expect one field per genre (`genre1`..`genre34`),
//! present with the value `"1"` when set and absent otherwise.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Highest genre code; codes run from 1 to this value inclusive.
pub const MAX_CATEGORY: u8 = 34;

/// Value a set flag serializes to.
const FLAG_SET: &str = "1";

/// Fixed set of genre flags, one bit per code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet(u64);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a packed code list.
    ///
    /// Tokens are matched exactly against the decimal codes `1`..=`34`.
    /// Anything else (out of range, padded, non-numeric, empty) is ignored.
    pub fn from_codes(packed: &str) -> Self {
        let mut set = Self::new();
        for code in packed.split(',').filter_map(parse_code) {
            set.insert(code);
        }
        set
    }

    /// Set the flag for `code`. Returns `false` if the code is out of range.
    pub fn insert(&mut self, code: u8) -> bool {
        if !(1..=MAX_CATEGORY).contains(&code) {
            return false;
        }
        self.0 |= 1 << code;
        true
    }

    pub fn contains(&self, code: u8) -> bool {
        (1..=MAX_CATEGORY).contains(&code) && self.0 & (1 << code) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Set codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=MAX_CATEGORY).filter(move |code| self.contains(*code))
    }
}

/// Parse one token of the packed list into an in-range code.
fn parse_code(token: &str) -> Option<u8> {
    let canonical = !token.is_empty()
        && !token.starts_with('0')
        && token.bytes().all(|b| b.is_ascii_digit());
    if !canonical {
        return None;
    }
    token
        .parse::<u8>()
        .ok()
        .filter(|code| (1..=MAX_CATEGORY).contains(code))
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for code in self.iter() {
            map.serialize_entry(&format!("genre{code}"), FLAG_SET)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
