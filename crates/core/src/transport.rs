//! Transport-safe renderings of stored column values.
//!
//! Every field of a listing record goes over the wire as a string. Free text
//! is base64 of the raw stored bytes so that historical rows containing NULs,
//! control characters or non-UTF-8 data cannot break message framing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::types::Timestamp;

/// Wire format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Digits after the decimal point for the review average.
pub const REVIEW_AVERAGE_PRECISION: usize = 5;

/// Encode free text as standard (padded) base64.
pub fn encode_text(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Inverse of [`encode_text`]; used by clients and tests.
pub fn decode_text(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}

pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_review_average(value: f64) -> String {
    format!("{value:.prec$}", prec = REVIEW_AVERAGE_PRECISION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
