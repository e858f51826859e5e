use super::{print_json, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_summary::DayEntry;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_hours, colorize_optional};
use crate::utils::date::{month_name, weekday_short};
use crate::utils::formatting::{fmt_hours, opt_text};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, full, json } = cmd {
        let (year, m) = resolve_month(month.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;
        let days = ReportLogic::daily(&pool, year, m, *full)?;

        if *json {
            return print_json(&days);
        }

        header(format!("{} {}", month_name(m), year));

        if days.is_empty() {
            info("No attendance records for this month.");
            return Ok(());
        }

        println!("{}", render(&days, cfg.show_weekday));
    }

    Ok(())
}

fn render(days: &[DayEntry], show_weekday: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Break"),
        Column::right("Interr."),
        Column::right("Side job"),
        Column::right("Actual"),
        Column::right("Gross"),
        Column::left("Comment"),
    ]);

    for d in days {
        let r = &d.raw;
        let s = &d.summary;

        let date = if show_weekday {
            format!("{} {}", r.date_str(), weekday_short(r.date))
        } else {
            r.date_str()
        };

        table.add_row(vec![
            date,
            colorize_optional(&opt_text(r.start_time.as_deref())),
            colorize_optional(&opt_text(r.end_time.as_deref())),
            colorize_optional(&fmt_hours(s.break_hours)),
            colorize_optional(&fmt_hours(s.interrupt_hours)),
            colorize_optional(&fmt_hours(s.side_job_hours)),
            format!(
                "{}{}{}",
                color_for_hours(s.actual_work_hours),
                fmt_hours(s.actual_work_hours),
                RESET
            ),
            fmt_hours(s.gross_hours),
            r.comment.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}
