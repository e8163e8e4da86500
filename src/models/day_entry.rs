use super::template::TemplateRef;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Resolved per-day status shown in the weekly calendar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Missed,
    Scheduled,
    Rest,
    Cancelled,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Missed => "missed",
            DayStatus::Scheduled => "scheduled",
            DayStatus::Rest => "rest",
            DayStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, DayStatus::Rest)
    }
}

/// Derived view model for one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayEntry {
    pub day_label: String, // "Mon" .. "Sun"
    pub day_number: u32,
    pub date: NaiveDate,
    pub template: Option<TemplateRef>,
    pub status: DayStatus,
    pub session_id: Option<i64>,
    pub scheduled_time: Option<NaiveTime>,
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
}

impl DayEntry {
    pub fn rest(date: NaiveDate) -> Self {
        use chrono::Datelike;

        Self {
            day_label: date.format("%a").to_string(),
            day_number: date.day(),
            date,
            template: None,
            status: DayStatus::Rest,
            session_id: None,
            scheduled_time: None,
            duration_minutes: None,
            notes: None,
        }
    }

    /// Counts toward the weekly total.
    pub fn is_workout(&self) -> bool {
        self.template.is_some() || !self.status.is_rest()
    }
}
