//! ANSI colour helpers for terminal output.

use crate::models::pool_state::PoolState;
use crate::models::worker_status::WorkerStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Colour per worker status: green complete, yellow still working, grey otherwise.
pub fn colour_for_status(status: WorkerStatus) -> Colour {
    match status {
        WorkerStatus::Complete => Colour::Green,
        WorkerStatus::InProgress => Colour::Yellow,
        WorkerStatus::Lead | WorkerStatus::Helper => Colour::Fixed(245),
    }
}

pub fn colour_for_state(state: PoolState) -> Colour {
    match state {
        PoolState::Completed => Colour::Green,
        PoolState::InProgress => Colour::Yellow,
        PoolState::NotStarted => Colour::Fixed(245),
    }
}

pub fn paint_status(status: WorkerStatus) -> String {
    colour_for_status(status).paint(status.as_str()).to_string()
}

pub fn paint_state(state: PoolState) -> String {
    colour_for_state(state).paint(state.as_str()).to_string()
}

/// Late rows are always red, regardless of status.
pub fn paint_late(value: &str) -> String {
    Colour::Red.bold().paint(value).to_string()
}

/// Returns a grey placeholder for empty values ("", "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
