pub mod dashboard;
pub mod messages;
pub mod week_view;
