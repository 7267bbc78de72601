//! Aggregate a regimen's working hours over a span of days.
//!
//! Each date the span touches contributes its whole schedule, as returned by
//! [`Regimen::work_hours_for`]. Schedules are not clipped to the span's
//! begin and end times, so a span covering any part of a working day counts
//! that day's hours in full.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::Result;
use crate::range::DateRange;
use crate::range_list::DateRangeList;
use crate::regimen::Regimen;

#[derive(Debug, Clone)]
pub struct Calendar<R> {
    regimen: R,
}

impl<R: Regimen> Calendar<R> {
    pub fn new(regimen: R) -> Self {
        Self { regimen }
    }

    pub fn regimen(&self) -> &R {
        &self.regimen
    }

    /// Total working hours over every date from `begin` to `end`.
    ///
    /// # Errors
    /// Returns [`DogdaysError::InvalidRange`](crate::DogdaysError::InvalidRange)
    /// if `begin > end`, or any error the regimen raises while building a day.
    pub fn work_hours_between(&self, begin: NaiveDateTime, end: NaiveDateTime) -> Result<f64> {
        let schedule = self.schedule_between(begin, end)?;
        Ok(schedule
            .iter()
            .fold(0.0, |total, (_, hours)| total + hours.total_hours()))
    }

    /// Per-date working hours from `begin` to `end`, one entry per date.
    pub fn schedule_between(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<(NaiveDate, DateRangeList)>> {
        let span = DateRange::new(begin, end)?;
        span.iter_dates()
            .map(|day| -> Result<(NaiveDate, DateRangeList)> {
                let hours = self.regimen.work_hours_for(day)?;
                debug!(%day, hours = hours.total_hours(), "scheduled day");
                Ok((day, hours))
            })
            .collect()
    }

    /// Dates from `begin` to `end` that the regimen treats as working days.
    pub fn working_days_between(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<NaiveDate>> {
        let span = DateRange::new(begin, end)?;
        Ok(span
            .iter_dates()
            .filter(|day| self.regimen.is_working_day(*day))
            .collect())
    }
}
