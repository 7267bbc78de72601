//! # dogdays
//!
//! Date range algebra and working-hour regimens.
//!
//! A [`DateRange`] is a closed span between two timestamps with intersection,
//! containment and disjointness queries. A [`DateRangeList`] keeps ranges
//! sorted and refuses overlaps. Regimens decide which days are worked and
//! date a day's shift segments, including night shifts and shifts that run
//! over several days.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dogdays::{Regimen, WorkRegimen};
//!
//! let mut regimen = WorkRegimen::new();
//! regimen.add_holiday(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
//!
//! let monday = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
//! assert!(regimen.is_working_day(monday));
//! assert_eq!(regimen.work_hours_for(monday).unwrap().total_hours(), 8.0);
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `DateRange` and its interval algebra
//! - [`range_list`] — sorted, non-overlapping `DateRangeList`
//! - [`shift`] — shift segments and the builder that dates them
//! - [`regimen`] — the `Regimen` trait and its business-day/fixed-hours policies
//! - [`calendar`] — working hours summed over a span of days
//! - [`config`] — JSON regimen configuration
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod error;
pub mod range;
pub mod range_list;
pub mod regimen;
pub mod shift;

pub use calendar::Calendar;
pub use config::RegimenConfig;
pub use error::{DogdaysError, Result};
pub use range::{DateIter, DateRange};
pub use range_list::DateRangeList;
pub use regimen::{BusinessDayRegimen, FixedHoursRegimen, Regimen, WorkRegimen};
pub use shift::{build_work_hours, ShiftSegment};
