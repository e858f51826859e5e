use super::{print_json, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::month_aggregate::MonthAggregate;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::month_name;
use crate::utils::formatting::{fmt_hours, hours2readable};
use serde::Serialize;

#[derive(Serialize)]
struct MonthSummary {
    month: String,
    #[serde(flatten)]
    aggregate: MonthAggregate,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, full, json } = cmd {
        let (year, m) = resolve_month(month.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;

        let aggregate = if *full {
            ReportLogic::full_month(&pool, year, m)?.aggregate
        } else {
            ReportLogic::summary(&pool, year, m)?
        };

        if *json {
            return print_json(&MonthSummary {
                month: format!("{year:04}-{m:02}"),
                aggregate,
            });
        }

        header(format!("Summary {} {}", month_name(m), year));
        print_aggregate(&aggregate);
    }

    Ok(())
}

fn print_aggregate(a: &MonthAggregate) {
    let rows = [
        ("Work", a.work_total_hours),
        ("Breaks", a.break_total_hours),
        ("Interruptions", a.interrupt_total_hours),
        ("Side job", a.side_job_total_hours),
        ("Gross", a.gross_total_hours),
        ("Actual work", a.actual_work_hours),
    ];

    for (label, h) in rows {
        println!(
            "{CYAN}{label:<16}{RESET}{:>8} h  ({})",
            fmt_hours(h),
            hours2readable(h, false)
        );
    }

    println!();
    println!("{CYAN}{:<16}{RESET}{:>8}", "Work days", a.work_days);
    println!("{CYAN}{:<16}{RESET}{:>8}", "Gross days", a.gross_days);
}
