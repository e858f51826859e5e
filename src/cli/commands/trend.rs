use super::{print_json, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

const MAX_MONTHS: u32 = 120;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend {
        until,
        months,
        json,
    } = cmd
    {
        if *months == 0 || *months > MAX_MONTHS {
            return Err(AppError::Other(format!(
                "--months must be between 1 and {MAX_MONTHS}"
            )));
        }

        let (year, m) = resolve_month(until.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;
        let points = ReportLogic::trend(&pool, year, m, *months)?;

        if *json {
            return print_json(&points);
        }

        header(format!("Trend of the last {months} month(s)"));

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Work days"),
            Column::right("Actual h"),
        ]);
        for p in &points {
            table.add_row(vec![
                p.month.clone(),
                p.work_days.to_string(),
                fmt_hours(p.actual_work_hours),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
