//! Tests for calendar increments and event rescheduling.

use chrono::{DateTime, TimeZone, Utc};
use event_window::{Event, EventError, FixedClock, Increment};

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Increment arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hour_adds_sixty_minutes() {
    assert_eq!(
        Increment::Hour.apply(utc(2026, 3, 1, 23, 30)),
        Some(utc(2026, 3, 2, 0, 30))
    );
}

#[test]
fn day_and_week_add_calendar_days() {
    let from = utc(2026, 2, 27, 8, 15);
    assert_eq!(Increment::Day.apply(from), Some(utc(2026, 2, 28, 8, 15)));
    assert_eq!(Increment::Week.apply(from), Some(utc(2026, 3, 6, 8, 15)));
}

#[test]
fn month_keeps_day_and_time() {
    assert_eq!(
        Increment::Month.apply(utc(2026, 3, 15, 14, 45)),
        Some(utc(2026, 4, 15, 14, 45))
    );
}

#[test]
fn month_crosses_year_boundary() {
    assert_eq!(
        Increment::Month.apply(utc(2025, 12, 15, 9, 0)),
        Some(utc(2026, 1, 15, 9, 0))
    );
}

#[test]
fn month_overflow_rolls_into_following_month() {
    // Feb 31 does not exist; the three extra days roll into March.
    assert_eq!(
        Increment::Month.apply(utc(2025, 1, 31, 12, 0)),
        Some(utc(2025, 3, 3, 12, 0))
    );
    // Leap year: Feb 31 becomes Mar 2.
    assert_eq!(
        Increment::Month.apply(utc(2024, 1, 31, 12, 0)),
        Some(utc(2024, 3, 2, 12, 0))
    );
}

#[test]
fn year_from_leap_day_lands_on_march_first() {
    assert_eq!(
        Increment::Year.apply(utc(2024, 2, 29, 6, 0)),
        Some(utc(2025, 3, 1, 6, 0))
    );
}

#[test]
fn year_keeps_ordinary_dates() {
    assert_eq!(
        Increment::Year.apply(utc(2026, 3, 1, 12, 0)),
        Some(utc(2027, 3, 1, 12, 0))
    );
}

#[test]
fn increments_at_the_end_of_time_overflow() {
    for increment in Increment::ALL {
        assert_eq!(
            increment.apply(DateTime::<Utc>::MAX_UTC),
            None,
            "{increment} should overflow"
        );
    }
}

#[test]
fn increment_names() {
    let names: Vec<String> = Increment::ALL.iter().map(|i| i.to_string()).collect();
    assert_eq!(names, ["hour", "day", "week", "month", "year"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Event rescheduling
// ─────────────────────────────────────────────────────────────────────────────

/// Helper: apply `mutate` to a fresh event and return its new bounds.
fn rescheduled(mutate: impl FnOnce(&mut Event) -> event_window::error::Result<()>) -> (i64, i64) {
    let mut event = Event::new("a", 1, 2);
    mutate(&mut event).unwrap();
    (event.start(), event.end())
}

#[test]
fn named_mutators_move_both_bounds_to_now_plus_increment() {
    let clock = FixedClock::new(utc(2026, 3, 1, 12, 0));
    let both = |t: DateTime<Utc>| (t.timestamp(), t.timestamp());

    assert_eq!(
        rescheduled(|e| e.schedule_for_next_hour(&clock)),
        both(utc(2026, 3, 1, 13, 0))
    );
    assert_eq!(
        rescheduled(|e| e.schedule_for_next_day(&clock)),
        both(utc(2026, 3, 2, 12, 0))
    );
    assert_eq!(
        rescheduled(|e| e.schedule_for_next_week(&clock)),
        both(utc(2026, 3, 8, 12, 0))
    );
    assert_eq!(
        rescheduled(|e| e.schedule_for_next_month(&clock)),
        both(utc(2026, 4, 1, 12, 0))
    );
    assert_eq!(
        rescheduled(|e| e.schedule_for_next_year(&clock)),
        both(utc(2027, 3, 1, 12, 0))
    );
}

#[test]
fn rescheduled_event_is_zero_length_and_future() {
    let clock = FixedClock::new(utc(2026, 3, 1, 12, 0));
    let mut event = Event::new("a", 1, 2);

    event.schedule_for_next_day(&clock).unwrap();

    assert_eq!(event.start(), event.end());
    assert!(event.is_future(&clock));
    assert!(!event.is_expired(&clock));
}

#[test]
fn expired_event_is_moved_to_next_year() {
    let now = utc(2026, 3, 1, 12, 0);
    let clock = FixedClock::new(now);
    let mut event = Event::new(
        "conference",
        utc(2025, 6, 1, 9, 0).timestamp(),
        utc(2025, 6, 3, 17, 0).timestamp(),
    );
    assert!(event.is_expired(&clock));

    let moved = event.schedule_for_next_year_if_expired(&clock).unwrap();

    assert!(moved);
    assert!(!event.is_expired(&clock));
    assert_eq!(event.start(), utc(2027, 3, 1, 12, 0).timestamp());
    assert_eq!(event.end(), utc(2027, 3, 1, 12, 0).timestamp());
    assert_eq!(event.name, "conference");
}

#[test]
fn unexpired_event_is_left_alone() {
    let clock = FixedClock::new(utc(2026, 3, 1, 12, 0));
    let start = utc(2026, 3, 1, 11, 0).timestamp();
    let end = utc(2026, 3, 1, 13, 0).timestamp();
    let mut event = Event::new("workshop", start, end);

    let moved = event.schedule_for_next_year_if_expired(&clock).unwrap();

    assert!(!moved);
    assert_eq!((event.start(), event.end()), (start, end));
}

#[test]
fn overflowing_reschedule_leaves_event_unchanged() {
    let clock = FixedClock::new(DateTime::<Utc>::MAX_UTC);
    let mut event = Event::new("a", 10, 20);

    let err = event.schedule_for_next_hour(&clock).unwrap_err();

    assert!(matches!(
        err,
        EventError::RescheduleOverflow { increment: Increment::Hour }
    ));
    assert_eq!((event.start(), event.end()), (10, 20));
}

#[test]
fn boxed_clock_can_drive_rescheduling() {
    let clock: Box<dyn event_window::Clock> = Box::new(FixedClock::new(utc(2026, 3, 1, 12, 0)));
    let mut event = Event::new("a", 1, 2);

    event.schedule_for_next(Increment::Week, &clock).unwrap();

    assert_eq!(event.start(), utc(2026, 3, 8, 12, 0).timestamp());
}
