//! # event-window
//!
//! Time-bounded events with temporal predicates, overlap validation, and
//! calendar rescheduling.
//!
//! An [`Event`] is a name plus a half-open `[start, end)` window in epoch
//! seconds. Predicates that depend on the current instant take a [`Clock`],
//! so the same event can be evaluated against the system clock or against a
//! pinned instant in tests.
//!
//! ## Modules
//!
//! - [`epoch`] — `TimeEpoch`, the raw start/end pair and its calendar accessors
//! - [`event`] — `Event` predicates, rescheduling, and display
//! - [`events`] — `Events` collection with pairwise overlap validation
//! - [`clock`] — Injectable "now" (`SystemClock`, `FixedClock`)
//! - [`reschedule`] — Calendar increments used to push an event forward
//! - [`format`] — RFC 1123 rendering and display timezone options
//! - [`error`] — Error types

pub mod clock;
pub mod epoch;
pub mod error;
pub mod event;
pub mod events;
pub mod format;
pub mod reschedule;

pub use clock::{Clock, FixedClock, SystemClock};
pub use epoch::TimeEpoch;
pub use error::EventError;
pub use event::Event;
pub use events::{Events, Overlap};
pub use format::FormatOptions;
pub use reschedule::Increment;
