//! Coaching dashboard: one line per client for the selected week.

use crate::core::logic::WeekLoad;
use crate::models::client::Client;
use crate::utils::colors::{RESET, YELLOW, color_for_rate};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub struct DashboardRow<'a> {
    pub client: &'a Client,
    pub load: WeekLoad,
}

pub fn render_dashboard(rows: &[DashboardRow]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Client"),
        Column::right("Workouts"),
        Column::right("Done"),
        Column::right("Time"),
        Column::right("Rate"),
    ]);

    for row in rows {
        let stats = &row.load.view.stats;
        let rate = stats.rounded_rate();

        let rate_cell = if row.load.fetch_error.is_some() {
            format!("{YELLOW}n/a{RESET}")
        } else {
            format!(
                "{}{}%{}",
                color_for_rate(rate, stats.total_workouts),
                rate,
                RESET
            )
        };

        table.add_row(vec![
            row.client.id.to_string(),
            row.client.name.clone(),
            stats.total_workouts.to_string(),
            stats.completed_workouts.to_string(),
            mins2readable(stats.total_duration, true),
            rate_cell,
        ]);
    }

    table.render()
}
