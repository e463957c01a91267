//! Raw start/end pair in epoch seconds.

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, Result};

/// A `[start, end)` window in seconds since the Unix epoch.
///
/// `start <= end` is not enforced. An inverted window is stored as given; it
/// is never current and never overlaps itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeEpoch {
    /// Inclusive.
    #[serde(rename = "start_time")]
    pub start: i64,
    /// Exclusive.
    #[serde(rename = "end_time")]
    pub end: i64,
}

impl TimeEpoch {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Calendar instant of `start`, shifted forward by one day.
    ///
    /// The shift is applied on read only; `start` itself is unchanged. The end
    /// accessor applies no shift.
    ///
    /// # Errors
    /// Returns `EventError::TimestampOutOfRange` if the shifted instant cannot be
    /// represented.
    pub fn start_time(&self) -> Result<DateTime<Utc>> {
        to_datetime(self.start)?
            .checked_add_days(Days::new(1))
            .ok_or(EventError::TimestampOutOfRange(self.start))
    }

    /// Calendar instant of `end`.
    ///
    /// # Errors
    /// Returns `EventError::TimestampOutOfRange` if `end` cannot be represented.
    pub fn end_time(&self) -> Result<DateTime<Utc>> {
        to_datetime(self.end)
    }
}

fn to_datetime(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(EventError::TimestampOutOfRange(secs))
}
