//! Human-readable rendering of event instants.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EventError, Result};

/// RFC 1123 layout, e.g. `Mon, 02 Jan 2006 15:04:05 UTC`.
pub const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Options controlling how instants are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Zone the instants are shown in. Stored values are always UTC.
    pub timezone: Tz,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { timezone: Tz::UTC }
    }
}

impl FormatOptions {
    /// Build options for an IANA timezone name (e.g. "Europe/Berlin").
    ///
    /// # Errors
    /// Returns `EventError::InvalidTimezone` if `name` is not a known IANA identifier.
    pub fn from_timezone(name: &str) -> Result<Self> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| EventError::InvalidTimezone(name.to_string()))?;
        Ok(Self { timezone })
    }

    pub fn render(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format(RFC1123)
            .to_string()
    }
}
