//! Closed date ranges and the interval algebra over them.
//!
//! A [`DateRange`] compares its endpoints inclusively: two ranges that touch
//! (`a.end == b.begin`) are *not* disjoint, and their intersection is the
//! zero-duration range at the touch point.

use std::fmt;
use std::iter::FusedIterator;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{DogdaysError, Result};

const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;
const MICROS_PER_HOUR: f64 = SECONDS_PER_HOUR * 1_000_000.0;

/// An immutable span between two timestamps, `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    begin: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// Build a range, rejecting `begin > end` with [`DogdaysError::InvalidRange`].
    /// Zero-duration ranges (`begin == end`) are allowed.
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if begin > end {
            return Err(DogdaysError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// The calendar day `date`, from its midnight to the next midnight.
    pub fn whole_day(date: NaiveDate) -> Result<Self> {
        let next = date
            .checked_add_days(Days::new(1))
            .ok_or(DogdaysError::DateOutOfRange(date))?;
        Self::new(
            date.and_time(NaiveTime::MIN),
            next.and_time(NaiveTime::MIN),
        )
    }

    pub fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the range in (fractional) hours.
    pub fn duration(&self) -> f64 {
        let span = self.end - self.begin;
        match span.num_microseconds() {
            Some(micros) => micros as f64 / MICROS_PER_HOUR,
            None => span.num_seconds() as f64 / SECONDS_PER_HOUR,
        }
    }

    /// True when `instant` lies within the range, both ends inclusive.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.begin <= instant && instant <= self.end
    }

    pub fn encompasses(&self, other: &DateRange) -> bool {
        self.begin <= other.begin && self.end >= other.end
    }

    pub fn encompassed_by(&self, other: &DateRange) -> bool {
        other.encompasses(self)
    }

    /// The range with the earlier begin. Ties go to `self`.
    pub fn leftmost<'a>(&'a self, other: &'a DateRange) -> &'a DateRange {
        if self.begin <= other.begin {
            self
        } else {
            other
        }
    }

    /// The range with the later end. Ties go to `self`.
    pub fn rightmost<'a>(&'a self, other: &'a DateRange) -> &'a DateRange {
        if self.end >= other.end {
            self
        } else {
            other
        }
    }

    /// True when a gap separates the two ranges.
    ///
    /// Touching ranges (`leftmost.end == rightmost.begin`) are not disjoint.
    pub fn disjoint(&self, other: &DateRange) -> bool {
        let leftmost = self.leftmost(other);
        let rightmost = self.rightmost(other);
        if leftmost == rightmost {
            return false;
        }
        leftmost.end < rightmost.begin
    }

    pub fn intersects(&self, other: &DateRange) -> bool {
        self.intersection(other).is_some()
    }

    /// The span shared by both ranges, or `None` when they are disjoint.
    ///
    /// Touching ranges yield a zero-duration range at the touch point.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if self.encompassed_by(other) {
            return Some(*self);
        }
        if self.encompasses(other) {
            return Some(*other);
        }
        if self.disjoint(other) {
            return None;
        }
        // Partial overlap: the left range still runs when the right one starts.
        let leftmost = self.leftmost(other);
        let rightmost = self.rightmost(other);
        Some(DateRange {
            begin: rightmost.begin,
            end: leftmost.end,
        })
    }

    /// Every calendar date the range touches, from `begin`'s date to `end`'s
    /// date inclusive. Each call starts a fresh iterator.
    pub fn iter_dates(&self) -> DateIter {
        DateIter {
            next: Some(self.begin.date()),
            last: self.end.date(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.begin, self.end)
    }
}

/// Iterator over the dates of a [`DateRange`], one day at a time.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.last)?;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(d) if d <= self.last => {
                let remaining = (self.last - d).num_days() as usize + 1;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for DateIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn partial_overlap_yields_shared_span() {
        let morning = DateRange::new(dt(1, 8), dt(1, 12)).unwrap();
        let midday = DateRange::new(dt(1, 10), dt(1, 14)).unwrap();

        let shared = DateRange::new(dt(1, 10), dt(1, 12)).unwrap();
        assert_eq!(morning.intersection(&midday), Some(shared));
        assert_eq!(midday.intersection(&morning), Some(shared));
    }

    #[test]
    fn size_hint_counts_remaining_dates() {
        let range = DateRange::new(dt(1, 0), dt(3, 12)).unwrap();
        let mut dates = range.iter_dates();
        assert_eq!(dates.size_hint(), (3, Some(3)));
        dates.next();
        assert_eq!(dates.size_hint(), (2, Some(2)));
    }

    #[test]
    fn iterator_stops_at_the_last_representable_date() {
        let last = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
        let range = DateRange::new(last, last).unwrap();
        let dates: Vec<_> = range.iter_dates().collect();
        assert_eq!(dates, vec![NaiveDate::MAX]);
    }

    #[test]
    fn whole_day_spans_midnight_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
        let day = DateRange::whole_day(date).unwrap();
        assert_eq!(day.begin(), dt(5, 0));
        assert_eq!(day.end(), dt(6, 0));
        assert_eq!(day.duration(), 24.0);
    }
}
