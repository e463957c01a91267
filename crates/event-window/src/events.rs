//! Ordered event collections and pairwise overlap validation.
//!
//! Every unordered pair is compared, so validation is quadratic in the number
//! of events. Adjacent events (one ends exactly when the next starts) do NOT
//! overlap.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::Event;

/// An overlapping pair found by [`Events::find_overlaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Index of the earlier event in the collection.
    pub first: usize,
    /// Index of the later event in the collection.
    pub second: usize,
    /// Length of the shared window in seconds. Never negative: an inverted
    /// window can satisfy the overlap test while sharing no instant, in which
    /// case this is 0.
    pub overlap_seconds: i64,
}

/// An ordered, owned sequence of events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Events(Vec<Event>);

impl Events {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, event: Event) {
        self.0.push(event);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Event> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.0
    }

    /// True when no two events overlap.
    ///
    /// The first offending pair is logged at `warn` level.
    pub fn is_valid(&self) -> bool {
        match self.first_overlap() {
            None => true,
            Some((i, j)) => {
                let (a, b) = (&self.0[i], &self.0[j]);
                tracing::warn!(
                    first = %a,
                    second = %b,
                    first_index = i,
                    second_index = j,
                    "overlapping events"
                );
                false
            }
        }
    }

    /// Indices of the first overlapping pair, scanning `(0, 1), (0, 2), ..., (1, 2), ...`.
    pub fn first_overlap(&self) -> Option<(usize, usize)> {
        self.pairs().find(|&(i, j)| self.0[i].is_overlapping(&self.0[j]))
    }

    /// Every overlapping pair, in scan order.
    ///
    /// The overlap length is `min(a.end, b.end) - max(a.start, b.start)`,
    /// clamped at 0.
    pub fn find_overlaps(&self) -> Vec<Overlap> {
        self.pairs()
            .filter_map(|(i, j)| {
                let (a, b) = (&self.0[i], &self.0[j]);
                if !a.is_overlapping(b) {
                    return None;
                }
                let overlap_start = a.start().max(b.start());
                let overlap_end = a.end().min(b.end());
                Some(Overlap {
                    first: i,
                    second: j,
                    overlap_seconds: overlap_end.saturating_sub(overlap_start).max(0),
                })
            })
            .collect()
    }

    /// Parse a JSON array of `{"name", "start_time", "end_time"}` objects.
    ///
    /// # Errors
    /// Returns `EventError::Json` if the input is not such an array.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.0.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}

impl From<Vec<Event>> for Events {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl From<Events> for Vec<Event> {
    fn from(events: Events) -> Self {
        events.0
    }
}

impl FromIterator<Event> for Events {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Event> for Events {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Events {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.0[index]
    }
}
