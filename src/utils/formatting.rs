//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Seconds as `H:MM:SS`, the way a duration cell reads on the dashboard.
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

pub fn optional_duration(secs: Option<i64>) -> String {
    secs.map(secs2readable).unwrap_or_else(|| "-".to_string())
}

/// Load values are whole numbers on the sheet; keep decimals only when present.
pub fn format_load(load: f64) -> String {
    if load.fract() == 0.0 {
        format!("{}", load as i64)
    } else {
        format!("{:.2}", load)
    }
}

/// Text progress bar, e.g. `[#####-----]` for 50% at width 10.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// A line of `ch` repeated `width` times, used between output blocks.
pub fn separator(ch: &str, width: usize) -> String {
    ch.chars().next().unwrap_or('-').to_string().repeat(width)
}
