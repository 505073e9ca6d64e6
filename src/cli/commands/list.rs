use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::input::load_dashboard;
use crate::models::pool_summary::PoolSummary;
use crate::ui::messages::{header, placeholder};
use crate::utils::colors::{paint_late, paint_state};
use crate::utils::formatting::format_load;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_optional, format_timestamp};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = &cli.command {
        let dashboard = load_dashboard(cli, cfg)?;
        let limit = limit.unwrap_or(cfg.previous_window);

        header(format!(
            "Pools as of {}",
            format_timestamp(&dashboard.evaluated_at)
        ));

        let Some(current) = dashboard.current() else {
            placeholder("No dated pool found");
            print_undated(&dashboard.undated());
            return Ok(());
        };

        let mut table = pool_table();
        add_pool_row(&mut table, "▶", current);
        for (i, p) in dashboard.ranked().into_iter().skip(1).take(limit).enumerate() {
            add_pool_row(&mut table, &(i + 1).to_string(), p);
        }
        print!("{}", table.render());

        let hidden = dashboard.ranking.ranked.len().saturating_sub(limit + 1);
        if hidden > 0 {
            println!("… {} older pool(s) not shown", hidden);
        }

        print_undated(&dashboard.undated());
    }
    Ok(())
}

fn pool_table() -> Table {
    Table::new(vec![
        Column::new("#"),
        Column::capped("Pool", 36),
        Column::capped("Lead", 20),
        Column::new("Pool Up"),
        Column::new("Count"),
        Column::new("Manpower"),
        Column::new("Done"),
        Column::new("State"),
        Column::new("Late"),
    ])
}

fn add_pool_row(table: &mut Table, rank: &str, p: &PoolSummary) {
    let late = p.overdue_count();
    table.add_row(vec![
        rank.to_string(),
        p.pool_id.clone(),
        p.lead_name.clone().unwrap_or_else(|| "-".to_string()),
        format_optional(p.pool_up_time.as_ref()),
        format_load(p.total_count),
        p.manpower.to_string(),
        format!("{}/{}", p.complete_count(), p.manpower),
        paint_state(p.state),
        if late > 0 {
            paint_late(&late.to_string())
        } else {
            "0".to_string()
        },
    ]);
}

/// Pools without a lead row cannot be dated; list them apart.
fn print_undated(pools: &[&PoolSummary]) {
    if pools.is_empty() {
        return;
    }
    println!("\nUndated pools (no lead row):");
    for p in pools {
        println!("  - {} (manpower {})", p.pool_id, p.manpower);
    }
}
