//! Injectable source of "now".
//!
//! Every predicate that depends on the current instant reads it through a
//! [`Clock`]. Production code passes [`SystemClock`]; tests pin time with
//! [`FixedClock`] so results do not depend on when the test runs.

use chrono::{DateTime, Utc};

use crate::error::{EventError, Result};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// The current instant as whole epoch seconds.
    fn now_epoch(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Reads the host wall clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Pin the clock to `secs` seconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `EventError::TimestampOutOfRange` if `secs` is outside the range
    /// chrono can represent.
    pub fn from_epoch(secs: i64) -> Result<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or(EventError::TimestampOutOfRange(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
