use super::day_entry::{DayEntry, DayStatus};
use serde::Serialize;

/// Aggregate completion metrics over one 7-day window.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WeeklyStats {
    pub total_workouts: u32,
    pub completed_workouts: u32,
    pub total_duration: i64,
    /// Percentage in 0..=100, not rounded.
    pub completion_rate: f64,
}

impl WeeklyStats {
    pub fn from_days(days: &[DayEntry]) -> Self {
        let mut stats = WeeklyStats::default();

        for day in days {
            if day.is_workout() {
                stats.total_workouts += 1;
            }
            if day.status == DayStatus::Completed {
                stats.completed_workouts += 1;
                stats.total_duration += day.duration_minutes.unwrap_or(0);
            }
        }

        stats.completion_rate = if stats.total_workouts == 0 {
            0.0
        } else {
            100.0 * f64::from(stats.completed_workouts) / f64::from(stats.total_workouts)
        };

        stats
    }

    /// Rate rounded for display.
    pub fn rounded_rate(&self) -> i64 {
        self.completion_rate.round() as i64
    }
}
