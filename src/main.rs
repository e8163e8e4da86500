//! coachweek main entrypoint.

use coachweek::run;
use coachweek::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
