mod common;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use coachweek::core::week::{build_week, build_week_at, try_build_week, validate_week};
use coachweek::errors::AppError;
use common::{at, date};

#[test]
fn test_week_starts_on_monday_and_is_consecutive() {
    let week = build_week(date(2024, 1, 3)); // Wednesday

    assert_eq!(week.len(), 7);
    assert_eq!(week[0], date(2024, 1, 1));
    assert_eq!(week[0].weekday(), Weekday::Mon);
    assert_eq!(week[6], date(2024, 1, 7));
    for pair in week.windows(2) {
        assert_eq!(pair[1] - pair[0], TimeDelta::days(1));
    }
}

#[test]
fn test_week_of_a_monday_starts_on_that_day() {
    let week = build_week(date(2024, 1, 8));
    assert_eq!(week[0], date(2024, 1, 8));
    assert_eq!(week[6], date(2024, 1, 14));
}

#[test]
fn test_sunday_belongs_to_the_week_before() {
    let week = build_week(date(2024, 1, 7)); // Sunday
    assert_eq!(week[0], date(2024, 1, 1));
    assert_eq!(week[6], date(2024, 1, 7));
}

#[test]
fn test_week_crossing_month_and_year() {
    let week = build_week(date(2024, 12, 31)); // Tuesday
    assert_eq!(week[0], date(2024, 12, 30));
    assert_eq!(week[2], date(2025, 1, 1));
    assert_eq!(week[6], date(2025, 1, 5));

    let leap = build_week(date(2024, 2, 29)); // Thursday
    assert_eq!(leap[0], date(2024, 2, 26));
    assert_eq!(leap[4], date(2024, 3, 1));
}

#[test]
fn test_week_from_datetime_ignores_time_of_day() {
    assert_eq!(
        build_week_at(at(2024, 1, 7, 23, 59)),
        build_week(date(2024, 1, 7))
    );
}

#[test]
fn test_validate_week_rejects_bad_windows() {
    let week = build_week(date(2024, 1, 3));
    assert!(validate_week(&week).is_ok());

    let short = &week[..6];
    assert!(matches!(
        validate_week(short),
        Err(AppError::InvalidArgument(_))
    ));

    let mut gap = week.to_vec();
    gap[3] = date(2024, 1, 20);
    assert!(matches!(
        validate_week(&gap),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn test_checked_week_matches_build_week() {
    for reference in [date(2024, 1, 1), date(2024, 1, 7), date(2024, 12, 31)] {
        assert_eq!(try_build_week(reference), Some(build_week(reference)));
    }
}

#[test]
fn test_checked_week_at_the_edges_of_the_date_range() {
    assert_eq!(try_build_week(NaiveDate::MAX), None);
    assert_eq!(try_build_week(NaiveDate::MIN), None);

    // a window that ends exactly on the last supported day is fine
    let last_sunday = (0..7)
        .map(|back| NaiveDate::MAX - TimeDelta::days(back))
        .find(|d| d.weekday() == Weekday::Sun)
        .unwrap();
    let week = try_build_week(last_sunday).unwrap();
    assert_eq!(week[6], last_sunday);
}
