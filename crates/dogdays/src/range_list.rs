//! Sorted list of mutually disjoint date ranges.
//!
//! Insertion keeps ranges ordered by begin and rejects any range that
//! intersects a member, touching endpoints included.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{trace, warn};

use crate::error::{DogdaysError, Result};
use crate::range::DateRange;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateRangeList {
    ranges: Vec<DateRange>,
}

impl DateRangeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a list from ranges taken as-is, without sorting or overlap checks.
    ///
    /// Useful for spelling out an expected schedule literally; use
    /// [`add_range`](Self::add_range) to build a list that enforces its invariants.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = DateRange>,
    {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    /// Build a range from `begin`/`end` and insert it.
    pub fn add(&mut self, begin: NaiveDateTime, end: NaiveDateTime) -> Result<&mut Self> {
        let range = DateRange::new(begin, end)?;
        self.add_range(range)
    }

    /// Insert `range` before the first member that begins after it.
    ///
    /// # Errors
    /// Returns [`DogdaysError::DuplicateRange`] if `range` intersects a member;
    /// the list is left unchanged.
    pub fn add_range(&mut self, range: DateRange) -> Result<&mut Self> {
        if self.intersects_any(&range) {
            warn!(%range, "rejected intersecting range");
            return Err(DogdaysError::DuplicateRange { range });
        }
        let position = self
            .ranges
            .iter()
            .position(|added| range.begin() < added.begin())
            .unwrap_or(self.ranges.len());
        trace!(%range, position, "inserting range");
        self.ranges.insert(position, range);
        Ok(self)
    }

    pub fn intersects_any(&self, range: &DateRange) -> bool {
        self.ranges.iter().any(|added| added.intersects(range))
    }

    /// True when exactly `range` is a member.
    pub fn contains(&self, range: &DateRange) -> bool {
        self.ranges.contains(range)
    }

    /// Sum of member durations, in hours.
    pub fn total_hours(&self) -> f64 {
        self.ranges
            .iter()
            .fold(0.0, |total, range| total + range.duration())
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn as_slice(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateRange> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a DateRangeList {
    type Item = &'a DateRange;
    type IntoIter = std::slice::Iter<'a, DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl IntoIterator for DateRangeList {
    type Item = DateRange;
    type IntoIter = std::vec::IntoIter<DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}
