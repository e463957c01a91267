//! Named time windows with temporal predicates and rescheduling.
//!
//! An [`Event`] composes a [`TimeEpoch`] with a display name. Predicates come in
//! two forms: `*_at(now)` takes the current instant as epoch seconds, and the
//! plain form reads it from a [`Clock`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::epoch::TimeEpoch;
use crate::error::{EventError, Result};
use crate::format::FormatOptions;
use crate::reschedule::Increment;

/// A named `[start, end)` window.
///
/// Serializes as a flat object: `{"name", "start_time", "end_time"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(flatten)]
    pub epoch: TimeEpoch,
}

impl Event {
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            epoch: TimeEpoch::new(start, end),
        }
    }

    pub fn start(&self) -> i64 {
        self.epoch.start
    }

    pub fn end(&self) -> i64 {
        self.epoch.end
    }

    /// See [`TimeEpoch::start_time`]; carries the same one-day shift.
    pub fn start_time(&self) -> Result<DateTime<Utc>> {
        self.epoch.start_time()
    }

    pub fn end_time(&self) -> Result<DateTime<Utc>> {
        self.epoch.end_time()
    }

    /// Both bounds are set (non-zero). Ordering is not checked.
    pub fn is_valid(&self) -> bool {
        self.epoch.start != 0 && self.epoch.end != 0
    }

    // ── Predicates against an explicit instant ─────────────────────────────

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.epoch.end < now
    }

    pub fn is_current_at(&self, now: i64) -> bool {
        self.epoch.start <= now && self.epoch.end > now
    }

    /// Same definition as [`Event::is_expired_at`].
    pub fn is_past_at(&self, now: i64) -> bool {
        self.is_expired_at(now)
    }

    pub fn is_future_at(&self, now: i64) -> bool {
        self.epoch.start > now
    }

    // ── Predicates against a clock ─────────────────────────────────────────

    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        self.is_expired_at(clock.now_epoch())
    }

    pub fn is_current(&self, clock: &impl Clock) -> bool {
        self.is_current_at(clock.now_epoch())
    }

    pub fn is_past(&self, clock: &impl Clock) -> bool {
        self.is_past_at(clock.now_epoch())
    }

    pub fn is_future(&self, clock: &impl Clock) -> bool {
        self.is_future_at(clock.now_epoch())
    }

    /// Half-open overlap: windows that only touch at a boundary do not overlap.
    pub fn is_overlapping(&self, other: &Event) -> bool {
        self.epoch.start < other.epoch.end && self.epoch.end > other.epoch.start
    }

    // ── Rescheduling ───────────────────────────────────────────────────────

    /// Move both bounds to `now + increment`, leaving a zero-length window.
    ///
    /// "now" is read once, so start and end are always equal afterwards.
    ///
    /// # Errors
    /// Returns `EventError::RescheduleOverflow` if the target instant cannot be
    /// represented. The event is left unchanged in that case.
    pub fn schedule_for_next(&mut self, increment: Increment, clock: &impl Clock) -> Result<()> {
        let target = increment
            .apply(clock.now())
            .ok_or(EventError::RescheduleOverflow { increment })?
            .timestamp();

        self.epoch.start = target;
        self.epoch.end = target;

        tracing::debug!(event = %self.name, %increment, at = target, "event rescheduled");
        Ok(())
    }

    pub fn schedule_for_next_hour(&mut self, clock: &impl Clock) -> Result<()> {
        self.schedule_for_next(Increment::Hour, clock)
    }

    pub fn schedule_for_next_day(&mut self, clock: &impl Clock) -> Result<()> {
        self.schedule_for_next(Increment::Day, clock)
    }

    pub fn schedule_for_next_week(&mut self, clock: &impl Clock) -> Result<()> {
        self.schedule_for_next(Increment::Week, clock)
    }

    pub fn schedule_for_next_month(&mut self, clock: &impl Clock) -> Result<()> {
        self.schedule_for_next(Increment::Month, clock)
    }

    pub fn schedule_for_next_year(&mut self, clock: &impl Clock) -> Result<()> {
        self.schedule_for_next(Increment::Year, clock)
    }

    /// Push an expired event one year past now. Returns whether it moved.
    pub fn schedule_for_next_year_if_expired(&mut self, clock: &impl Clock) -> Result<bool> {
        if !self.is_expired(clock) {
            return Ok(false);
        }
        self.schedule_for_next_year(clock)?;
        Ok(true)
    }

    // ── Display ────────────────────────────────────────────────────────────

    /// `"{name} S: {start} - E: {end}"` in UTC.
    pub fn format(&self) -> String {
        self.format_with(&FormatOptions::default())
    }

    /// Like [`Event::format`], rendering instants in `options.timezone`.
    ///
    /// A bound outside the representable range is shown as `@<seconds>`.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        let start = match self.start_time() {
            Ok(t) => options.render(t),
            Err(_) => format!("@{}", self.epoch.start),
        };
        let end = match self.end_time() {
            Ok(t) => options.render(t),
            Err(_) => format!("@{}", self.epoch.end),
        };
        format!("{} S: {} - E: {}", self.name, start, end)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
