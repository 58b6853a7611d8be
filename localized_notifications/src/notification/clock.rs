//! Process-monotonic creation timestamps.
//!
//! Wall-clock readings can step backwards (NTP slews, manual changes). The
//! last issued timestamp is tracked so successive notifications never appear
//! to have been created before their predecessors.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Returns the current UTC time, clamped to be no earlier than any value
/// previously returned in this process.
pub(crate) fn monotonic_now() -> DateTime<Utc> {
    let observed = Utc::now().timestamp_micros();
    let previous = LAST_ISSUED_MICROS.fetch_max(observed, Ordering::AcqRel);
    let issued = previous.max(observed);
    DateTime::from_timestamp_micros(issued).unwrap_or_else(Utc::now)
}
