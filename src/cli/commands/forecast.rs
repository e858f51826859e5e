use super::{print_json, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ForecastReport, ReportLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::forecast::ForecastPoint;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_band};
use crate::utils::date::month_name;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Forecast {
        month,
        series,
        json,
    } = cmd
    {
        let (year, m) = resolve_month(month.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;
        let report = ReportLogic::forecast(&pool, cfg, year, m, *series)?;

        if *json {
            return print_json(&report);
        }

        header(format!("Forecast {} {}", month_name(m), year));
        print_report(&report);

        if let Some(points) = &report.series {
            println!();
            println!("{}", render_series(points));
        }
    }

    Ok(())
}

fn print_report(r: &ForecastReport) {
    let res = &r.result;
    println!("{CYAN}{:<20}{RESET}{:>8} h", "Registered", fmt_hours(res.registered_work_hours));
    println!("{CYAN}{:<20}{RESET}{:>8}", "Unregistered days", res.unregistered_days);
    println!("{CYAN}{:<20}{RESET}{:>8}", "Holidays", res.holiday_days);
    println!(
        "{CYAN}{:<20}{RESET}{}{:>8} h{} ({} of {}-{} h)",
        "Predicted",
        color_for_band(r.band),
        fmt_hours(res.predicted_work_hours),
        RESET,
        r.band.as_str(),
        fmt_hours(r.lower_threshold_hours),
        fmt_hours(r.upper_threshold_hours)
    );
}

fn render_series(points: &[ForecastPoint]) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Actual"),
        Column::right("Forecast"),
    ]);

    for p in points {
        table.add_row(vec![
            p.date.format("%Y-%m-%d").to_string(),
            fmt_hours(p.actual_cumulative),
            fmt_hours(p.forecast_cumulative),
        ]);
    }

    table.render()
}
