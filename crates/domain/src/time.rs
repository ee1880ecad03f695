//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for semester dates and payment creation times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Split a timestamp into whole epoch seconds and the nanosecond remainder.
///
/// Ordering by the pair is chronological at full precision over the whole
/// range of [`Timestamp`].
#[must_use]
pub fn sort_key(ts: Timestamp) -> (i64, i64) {
    (ts.timestamp(), i64::from(ts.timestamp_subsec_nanos()))
}
