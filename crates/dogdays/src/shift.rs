//! Shift segments and the schedule builder that dates them.
//!
//! A regimen declares its working hours as an ordered list of
//! [`ShiftSegment`]s, each a start and end time of day. [`build_work_hours`]
//! anchors those segments to a concrete date:
//!
//! - A segment whose end is not after its start runs past midnight and ends on
//!   the following day. `21:00-21:00` is a full 24-hour shift.
//! - A segment that starts earlier in the day than the one before it is placed
//!   on a later day.
//! - A segment that ran past midnight pushes every following segment one day
//!   further out.
//!
//! The two day-shifts accumulate, so a night shift followed by an early
//! morning segment puts the morning segment two days after the anchor:
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use dogdays::shift::{build_work_hours, ShiftSegment};
//!
//! let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
//! let residency = [
//!     ShiftSegment::new(time(21), time(21)),
//!     ShiftSegment::new(time(7), time(13)),
//! ];
//!
//! let hours = build_work_hours(monday, &residency).unwrap();
//! let wednesday = NaiveDate::from_ymd_opt(2015, 1, 7).unwrap();
//! assert_eq!(hours.as_slice()[1].begin(), wednesday.and_time(time(7)));
//! ```

use chrono::{Days, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DogdaysError, Result};
use crate::range::DateRange;
use crate::range_list::DateRangeList;

/// One recurring daily work period, possibly spanning midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftSegment {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftSegment {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// The 09:00-17:00 office day.
    pub fn office_hours() -> Self {
        Self::new(
            NaiveTime::MIN + Duration::hours(9),
            NaiveTime::MIN + Duration::hours(17),
        )
    }

    /// True when the segment ends on the day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.start >= self.end
    }

    /// Anchor the segment on `date`.
    pub fn on(&self, date: NaiveDate) -> Result<DateRange> {
        let begin = date.and_time(self.start);
        let end = if self.crosses_midnight() {
            add_days(date, 1)?.and_time(self.end)
        } else {
            date.and_time(self.end)
        };
        DateRange::new(begin, end)
    }
}

/// Date `segments` starting on `date`, in declared order.
///
/// # Errors
/// Returns [`DogdaysError::DuplicateRange`] when two dated segments intersect,
/// and [`DogdaysError::DateOutOfRange`] when the offset runs past chrono's
/// last representable date.
pub fn build_work_hours(date: NaiveDate, segments: &[ShiftSegment]) -> Result<DateRangeList> {
    let mut result = DateRangeList::new();
    let mut offset = 0u64;
    let mut last_start: Option<NaiveTime> = None;

    for segment in segments {
        if last_start.is_some_and(|last| last > segment.start) {
            offset += 1;
        }
        let range = segment.on(add_days(date, offset)?)?;
        if range.begin().date() < range.end().date() {
            offset += 1;
        }
        debug!(%range, offset, "dated shift segment");
        result.add_range(range)?;
        last_start = Some(segment.start);
    }

    Ok(result)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(DogdaysError::DateOutOfRange(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn equal_start_and_end_is_a_full_day() {
        let segment = ShiftSegment::new(time(21), time(21));
        assert!(segment.crosses_midnight());

        let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
        assert_eq!(segment.on(date).unwrap().duration(), 24.0);
    }

    #[test]
    fn midnight_end_belongs_to_the_next_day() {
        let segment = ShiftSegment::new(time(16), time(0));
        let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
        let range = segment.on(date).unwrap();
        assert_eq!(range.end().date(), date.succ_opt().unwrap());
        assert_eq!(range.duration(), 8.0);
    }

    #[test]
    fn overnight_segment_on_the_last_date_overflows() {
        let segment = ShiftSegment::new(time(22), time(6));
        let err = segment.on(NaiveDate::MAX).unwrap_err();
        assert_eq!(err, DogdaysError::DateOutOfRange(NaiveDate::MAX));
    }

    #[test]
    fn no_segments_build_an_empty_list() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
        assert!(build_work_hours(date, &[]).unwrap().is_empty());
    }
}
