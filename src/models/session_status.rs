use serde::Serialize;

/// Status tag stored on a session row.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    NoShow,
    Cancelled,
}

impl SessionStatus {
    /// Parse user input; accepts `no-show` as well as `no_show`.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "scheduled" => Some(Self::Scheduled),
            "completed" | "done" => Some(Self::Completed),
            "no_show" | "noshow" => Some(Self::NoShow),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Completed => "completed",
            SessionStatus::NoShow => "no_show",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(SessionStatus::Scheduled),
            "completed" => Some(SessionStatus::Completed),
            "no_show" => Some(SessionStatus::NoShow),
            "cancelled" => Some(SessionStatus::Cancelled),
            _ => None,
        }
    }
}
