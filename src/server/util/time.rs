//! Date helpers.
//!
//! Task creation and completion dates and test dates are calendar dates in UTC.

use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Current calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current timestamp in UTC, used for record creation times.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
