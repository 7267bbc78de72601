//! Work regimens: which days are working days, and which hours of them.
//!
//! [`Regimen`] is the policy contract. [`BusinessDayRegimen`] gates on weekends
//! and holidays, [`FixedHoursRegimen`] dates a list of shift segments, and
//! [`WorkRegimen`] composes the two.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::Result;
use crate::range::DateRange;
use crate::range_list::DateRangeList;
use crate::shift::{build_work_hours, ShiftSegment};

/// A policy deciding which days are worked and which hours of them.
pub trait Regimen {
    /// Whether work happens on `date` at all. Every day is a working day
    /// unless the regimen says otherwise.
    fn is_working_day(&self, _date: NaiveDate) -> bool {
        true
    }

    /// The working hours that start on `date`. Empty on non-working days.
    fn work_hours_for(&self, date: NaiveDate) -> Result<DateRangeList>;
}

/// Monday to Friday, minus holidays.
///
/// On its own this regimen has no notion of hours, so a working day is
/// worked around the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessDayRegimen {
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessDayRegimen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Adding the same holiday twice has no further effect.
    pub fn add_holiday(&mut self, holiday: NaiveDate) {
        self.holidays.insert(holiday);
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }
}

impl Regimen for BusinessDayRegimen {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    fn work_hours_for(&self, date: NaiveDate) -> Result<DateRangeList> {
        let mut hours = DateRangeList::new();
        if self.is_working_day(date) {
            hours.add_range(DateRange::whole_day(date)?)?;
        }
        Ok(hours)
    }
}

/// The same shift segments, every day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHoursRegimen {
    segments: Vec<ShiftSegment>,
}

impl Default for FixedHoursRegimen {
    fn default() -> Self {
        Self {
            segments: vec![ShiftSegment::office_hours()],
        }
    }
}

impl FixedHoursRegimen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segments(segments: Vec<ShiftSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[ShiftSegment] {
        &self.segments
    }

    pub fn set_segments(&mut self, segments: Vec<ShiftSegment>) {
        self.segments = segments;
    }

    /// Date the segments on `date`, ignoring whether it is a working day.
    pub fn build_for(&self, date: NaiveDate) -> Result<DateRangeList> {
        build_work_hours(date, &self.segments)
    }
}

impl Regimen for FixedHoursRegimen {
    fn work_hours_for(&self, date: NaiveDate) -> Result<DateRangeList> {
        if !self.is_working_day(date) {
            return Ok(DateRangeList::new());
        }
        self.build_for(date)
    }
}

/// Business days worked on fixed shift segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkRegimen {
    business_days: BusinessDayRegimen,
    hours: FixedHoursRegimen,
}

impl WorkRegimen {
    /// No holidays, 09:00-17:00.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(business_days: BusinessDayRegimen, hours: FixedHoursRegimen) -> Self {
        Self {
            business_days,
            hours,
        }
    }

    pub fn add_holiday(&mut self, holiday: NaiveDate) {
        self.business_days.add_holiday(holiday);
    }

    pub fn set_segments(&mut self, segments: Vec<ShiftSegment>) {
        self.hours.set_segments(segments);
    }

    pub fn business_days(&self) -> &BusinessDayRegimen {
        &self.business_days
    }

    pub fn hours(&self) -> &FixedHoursRegimen {
        &self.hours
    }
}

impl Regimen for WorkRegimen {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        self.business_days.is_working_day(date)
    }

    fn work_hours_for(&self, date: NaiveDate) -> Result<DateRangeList> {
        if !self.is_working_day(date) {
            return Ok(DateRangeList::new());
        }
        self.hours.build_for(date)
    }
}

impl<R: Regimen + ?Sized> Regimen for &R {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        (**self).is_working_day(date)
    }

    fn work_hours_for(&self, date: NaiveDate) -> Result<DateRangeList> {
        (**self).work_hours_for(date)
    }
}
