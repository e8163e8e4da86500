pub mod config;
pub mod derive;
pub mod log;
pub mod logic;
pub mod plans;
pub mod session;
pub mod sources;
pub mod week;

pub use derive::{WeekView, derive_week};
pub use week::{build_week, try_build_week, validate_week};
