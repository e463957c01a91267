//! Error types for event-window operations.

use thiserror::Error;

use crate::reschedule::Increment;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Rescheduling by one {increment} overflows the calendar range")]
    RescheduleOverflow { increment: Increment },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EventError>;
