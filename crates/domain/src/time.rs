//! Timestamps carried by date-time values and change events.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `DateTime` item states, `last_change` and event times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
