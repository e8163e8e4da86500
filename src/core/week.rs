//! Week window builder: the Monday-start 7-day window around a date.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta};

pub const DAYS_PER_WEEK: usize = 7;

fn monday_offset(reference: NaiveDate) -> i64 {
    let weekday = i64::from(reference.weekday().num_days_from_sunday());
    if weekday == 0 { -6 } else { 1 - weekday }
}

/// Monday..Sunday window containing `reference`.
///
/// Weekdays are numbered 0 = Sunday .. 6 = Saturday: Sunday is moved back
/// six days, every other day by `1 - weekday`.
///
/// Panics if the window falls outside the range `NaiveDate` supports; use
/// [`try_build_week`] for dates that come from user input.
pub fn build_week(reference: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let monday = reference + TimeDelta::days(monday_offset(reference));
    std::array::from_fn(|i| monday + TimeDelta::days(i as i64))
}

/// Checked [`build_week`]: `None` when the Monday or the Sunday of the
/// window is not representable.
pub fn try_build_week(reference: NaiveDate) -> Option<[NaiveDate; DAYS_PER_WEEK]> {
    let monday = reference.checked_add_signed(TimeDelta::days(monday_offset(reference)))?;
    monday.checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))?;

    Some(std::array::from_fn(|i| monday + TimeDelta::days(i as i64)))
}

/// Same as [`build_week`] for a timestamp; the time of day is ignored.
pub fn build_week_at(reference: NaiveDateTime) -> [NaiveDate; DAYS_PER_WEEK] {
    build_week(reference.date())
}

/// Reject anything that is not exactly 7 ascending consecutive dates.
pub fn validate_week(week: &[NaiveDate]) -> AppResult<()> {
    if week.len() != DAYS_PER_WEEK {
        return Err(AppError::InvalidArgument(format!(
            "week window must contain {} dates, got {}",
            DAYS_PER_WEEK,
            week.len()
        )));
    }

    for pair in week.windows(2) {
        if pair[0].succ_opt() != Some(pair[1]) {
            return Err(AppError::InvalidArgument(format!(
                "week window is not consecutive: {} is followed by {}",
                pair[0], pair[1]
            )));
        }
    }

    Ok(())
}
