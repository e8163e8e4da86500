//! Terminal rendering of a derived week.

use crate::config::Config;
use crate::core::logic::WeekLoad;
use crate::models::day_entry::DayEntry;
use crate::ui::messages::{header, separator_line};
use crate::utils::colors::{RESET, color_for_rate, color_for_status, colorize_optional};
use crate::utils::formatting::{mins2readable, weekday_label};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_short;

const NOTES_WIDTH: usize = 32;

fn status_cell(day: &DayEntry) -> String {
    format!(
        "{}{}{}",
        color_for_status(day.status),
        day.status.as_str(),
        RESET
    )
}

fn duration_cell(day: &DayEntry) -> String {
    match day.duration_minutes {
        Some(m) => mins2readable(m, false),
        None => colorize_optional("--"),
    }
}

fn session_cell(day: &DayEntry) -> String {
    match day.session_id {
        Some(id) => id.to_string(),
        None => colorize_optional("--"),
    }
}

pub fn render_week(load: &WeekLoad, client_name: &str, cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::left("Day"),
        Column::right("#"),
        Column::left("Status"),
        Column::left("Time"),
        Column::left("Workout"),
        Column::right("Duration"),
        Column::right("Session"),
        Column::left("Notes"),
    ]);

    for day in &load.view.days {
        let notes: Vec<String> = day
            .notes
            .as_deref()
            .map(|n| {
                textwrap::wrap(n, NOTES_WIDTH)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            })
            .unwrap_or_default();

        let time = if day.status.is_rest() {
            colorize_optional("")
        } else {
            colorize_optional(&format_time_short(day.scheduled_time))
        };

        table.add_row(vec![
            weekday_label(day.date, cfg.show_weekday),
            day.day_number.to_string(),
            status_cell(day),
            time,
            day.template
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            duration_cell(day),
            session_cell(day),
            notes.first().cloned().unwrap_or_default(),
        ]);

        // continuation lines of wrapped notes
        for line in notes.iter().skip(1) {
            let mut row = vec![String::new(); 7];
            row.push(line.clone());
            table.add_row(row);
        }
    }

    let stats = &load.view.stats;
    let rate = stats.rounded_rate();

    let mut out = header(
        format!(
            "📅 {} · week {} → {}",
            client_name, load.week_start, load.week_end
        ),
        &cfg.separator_char,
    );
    out.push('\n');
    out.push_str(&table.render());
    out.push_str(&separator_line(&cfg.separator_char, 40));
    out.push('\n');
    out.push_str(&format!(
        "Workouts: {}  Completed: {}  Time: {}  Rate: {}{}%{}\n",
        stats.total_workouts,
        stats.completed_workouts,
        mins2readable(stats.total_duration, false),
        color_for_rate(rate, stats.total_workouts),
        rate,
        RESET
    ));

    out
}
