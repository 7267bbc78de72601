//! Tests for working hours aggregated over a span of days.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dogdays::{
    BusinessDayRegimen, Calendar, DogdaysError, FixedHoursRegimen, ShiftSegment, WorkRegimen,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, day).unwrap()
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, 0, 0).unwrap()
}

fn segment(start: u32, end: u32) -> ShiftSegment {
    ShiftSegment::new(
        NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
    )
}

/// Office hours with New Year's Day off.
fn calendar() -> Calendar<WorkRegimen> {
    let mut regimen = WorkRegimen::new();
    regimen.add_holiday(date(1));
    Calendar::new(regimen)
}

// ── work_hours_between ──────────────────────────────────────────────────────

#[test]
fn sums_a_working_week() {
    // Mon 5th to Fri 9th: five 8-hour days.
    let hours = calendar().work_hours_between(at(5, 0), at(9, 23)).unwrap();
    assert_eq!(hours, 40.0);
}

#[test]
fn skips_weekends_and_holidays() {
    // Thu 1st (holiday) to Sun 11th: Fri 2nd plus Mon 5th..Fri 9th.
    let hours = calendar().work_hours_between(at(1, 0), at(11, 0)).unwrap();
    assert_eq!(hours, 48.0);
}

#[test]
fn counts_whole_days_touched_by_the_span() {
    // 16:00 to 10:00 next day still counts both office days in full.
    let hours = calendar().work_hours_between(at(5, 16), at(6, 10)).unwrap();
    assert_eq!(hours, 16.0);
}

#[test]
fn zero_length_span_counts_its_day() {
    let hours = calendar().work_hours_between(at(5, 12), at(5, 12)).unwrap();
    assert_eq!(hours, 8.0);
}

#[test]
fn weekend_only_span_has_no_hours() {
    let hours = calendar().work_hours_between(at(3, 0), at(4, 23)).unwrap();
    assert_eq!(hours, 0.0);
    assert!(hours.is_sign_positive());
}

#[test]
fn rejects_a_reversed_span() {
    let err = calendar().work_hours_between(at(9, 0), at(5, 0)).unwrap_err();
    assert!(matches!(err, DogdaysError::InvalidRange { .. }));
}

#[test]
fn night_shifts_count_from_their_starting_day() {
    let mut regimen = WorkRegimen::new();
    regimen.set_segments(vec![segment(21, 5)]);
    let calendar = Calendar::new(regimen);

    // Fri 9th's shift runs into Saturday; Saturday itself starts none.
    let hours = calendar.work_hours_between(at(9, 0), at(10, 0)).unwrap();
    assert_eq!(hours, 8.0);
}

#[test]
fn propagates_overlapping_segment_errors() {
    let mut regimen = WorkRegimen::new();
    regimen.set_segments(vec![segment(9, 13), segment(12, 17)]);
    let calendar = Calendar::new(regimen);

    let err = calendar.work_hours_between(at(5, 0), at(6, 0)).unwrap_err();
    assert!(matches!(err, DogdaysError::DuplicateRange { .. }));
}

#[test]
fn works_with_any_regimen() {
    let every_day = Calendar::new(FixedHoursRegimen::new());
    assert_eq!(every_day.work_hours_between(at(3, 0), at(4, 0)).unwrap(), 16.0);

    let business_days = Calendar::new(BusinessDayRegimen::new());
    assert_eq!(
        business_days.work_hours_between(at(2, 0), at(5, 0)).unwrap(),
        48.0
    );
}

// ── schedule_between / working_days_between ────────────────────────────────

#[test]
fn schedule_has_one_entry_per_date() {
    let schedule = calendar().schedule_between(at(2, 12), at(5, 12)).unwrap();
    let days: Vec<NaiveDate> = schedule.iter().map(|(day, _)| *day).collect();
    assert_eq!(days, vec![date(2), date(3), date(4), date(5)]);

    let hours: Vec<f64> = schedule.iter().map(|(_, h)| h.total_hours()).collect();
    assert_eq!(hours, vec![8.0, 0.0, 0.0, 8.0]);
}

#[test]
fn lists_working_days() {
    let days = calendar().working_days_between(at(1, 0), at(7, 0)).unwrap();
    assert_eq!(days, vec![date(2), date(5), date(6), date(7)]);
}

#[test]
fn borrows_a_regimen() {
    let regimen = WorkRegimen::new();
    let calendar = Calendar::new(&regimen);
    assert_eq!(calendar.work_hours_between(at(5, 0), at(5, 0)).unwrap(), 8.0);
    assert_eq!(calendar.regimen(), &&regimen);
}
