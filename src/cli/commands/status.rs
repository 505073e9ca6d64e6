use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::input::load_dashboard;
use crate::models::pool_summary::PoolSummary;
use crate::models::worker_status::WorkerStatus;
use crate::ui::messages::{header, placeholder};
use crate::utils::colors::{colorize_optional, paint_late, paint_state, paint_status};
use crate::utils::formatting::{bold, format_load, optional_duration, progress_bar, separator};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_clock, format_optional};
use chrono::NaiveDateTime;

const BAR_WIDTH: usize = 20;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { pool, all } = &cli.command {
        let dashboard = load_dashboard(cli, cfg)?;

        let summary = match pool {
            Some(id) => Some(
                dashboard
                    .pool(id)
                    .ok_or_else(|| AppError::PoolNotFound(id.clone()))?,
            ),
            None => dashboard.current(),
        };

        match summary {
            Some(s) => print_pool(s, *all, &cfg.separator_char, dashboard.evaluated_at),
            None => placeholder("No active pool found"),
        }
    }
    Ok(())
}

pub(crate) fn print_pool(s: &PoolSummary, all: bool, sep: &str, now: NaiveDateTime) {
    header(&s.pool_id);
    println!(
        "{}  {}",
        bold(s.lead_name.as_deref().unwrap_or("-")),
        paint_state(s.state)
    );
    println!(
        "⬆ Pool Up: {}   Done: {} / {}",
        format_optional(s.pool_up_time.as_ref()),
        format_load(s.done_load()),
        format_load(s.total_count)
    );
    println!(
        "Total Count: {}   Manpower: {}   Target: {}   Expected Completion: {}",
        format_load(s.total_count),
        s.manpower,
        if s.manpower > 0 {
            format!("{:.1}", s.target_load)
        } else {
            "-".to_string()
        },
        s.expected_completion
            .as_ref()
            .map(format_clock)
            .unwrap_or_else(|| "-".to_string())
    );
    if s.past_expected_completion {
        println!(
            "{}",
            paint_late(&format!(
                "Past expected completion (now {})",
                format_clock(&now)
            ))
        );
    }
    println!("{}", separator(sep, 72));

    let mut table = Table::new(vec![
        Column::capped("Name", 24),
        Column::new("Progress"),
        Column::new("Load"),
        Column::new("%"),
        Column::new("Duration"),
        Column::new("Status"),
        Column::capped("Note", 40),
    ]);

    if all && let Some(lead) = &s.lead_name {
        table.add_row(vec![
            lead.clone(),
            String::new(),
            format_load(s.total_count),
            String::new(),
            colorize_optional("-"),
            paint_status(WorkerStatus::Lead),
            String::new(),
        ]);
    }

    if all {
        for extra in &s.extra_leads {
            table.add_row(vec![
                extra.clone(),
                String::new(),
                String::new(),
                String::new(),
                colorize_optional("-"),
                paint_status(WorkerStatus::Lead),
                paint_late("Extra lead row (ignored)"),
            ]);
        }
    }

    for w in &s.workers {
        let note = w.late_reason.clone().unwrap_or_default();
        table.add_row(vec![
            w.name.clone(),
            progress_bar(w.load_percent, BAR_WIDTH),
            format_load(w.load),
            format!("{}%", w.load_percent),
            colorize_optional(&optional_duration(w.duration_seconds)),
            if w.overdue {
                paint_late(w.status.as_str())
            } else {
                paint_status(w.status)
            },
            if w.overdue { paint_late(&note) } else { note },
        ]);
    }

    if all {
        for h in &s.helpers {
            table.add_row(vec![
                h.clone(),
                String::new(),
                "0".to_string(),
                String::new(),
                colorize_optional("-"),
                paint_status(WorkerStatus::Helper),
                String::new(),
            ]);
        }
    }

    if table.is_empty() {
        placeholder("No active workers yet");
    } else {
        print!("{}", table.render());
    }

    println!(
        "{}  {}  {}",
        paint_status(WorkerStatus::Complete),
        paint_status(WorkerStatus::InProgress),
        paint_late("Late")
    );
}
