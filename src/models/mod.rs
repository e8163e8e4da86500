pub mod client;
pub mod day_entry;
pub mod session;
pub mod session_status;
pub mod template;
pub mod weekly_stats;
pub mod workout_plan;
