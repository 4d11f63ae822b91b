//! Past/upcoming partition of shows relative to a reference instant.

use chrono::{DateTime, Utc};

/// Display format for show start times, e.g. `2035-04-01 20:00:00`.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a start time the way every show summary carries it.
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Shows split into those at or before the reference instant and those after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Classification<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Apply `f` to every entry, keeping the partition and order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Classification<U> {
        Classification {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

/// Whether a show starting at `start_time` counts as past at `reference`.
///
/// A show starting exactly at the reference instant is past.
pub fn is_past(reference: DateTime<Utc>, start_time: DateTime<Utc>) -> bool {
    start_time <= reference
}

/// Partition `items` by their start time, preserving input order in each half.
pub fn classify<T, I, F>(reference: DateTime<Utc>, items: I, start_time: F) -> Classification<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for item in items {
        if is_past(reference, start_time(&item)) {
            past.push(item);
        } else {
            upcoming.push(item);
        }
    }
    Classification { past, upcoming }
}

/// Count-only form of [`classify`].
pub fn count_upcoming<'a, T, I, F>(reference: DateTime<Utc>, items: I, start_time: F) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> DateTime<Utc>,
{
    items
        .into_iter()
        .filter(|item| !is_past(reference, start_time(*item)))
        .count()
}
