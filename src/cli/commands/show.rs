use super::{print_json, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_summary::DayEntry;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_hours, colorize_optional};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{fmt_hours, hours2readable, opt_minutes, opt_text};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date, json } = cmd {
        let d = resolve_date(date)?;
        let pool = DbPool::new(&cfg.database)?;
        let entry = ReportLogic::day(&pool, d)?;

        if *json {
            return print_json(&entry);
        }

        print_entry(&entry, cfg.show_weekday);
    }

    Ok(())
}

fn line(label: &str, value: String) {
    println!("{CYAN}{label:<18}{RESET}{value}");
}

fn print_entry(entry: &DayEntry, show_weekday: bool) {
    let r = &entry.raw;
    let s = &entry.summary;

    if show_weekday {
        header(format!("{} ({})", r.date_str(), weekday_short(r.date)));
    } else {
        header(r.date_str());
    }

    line("Start", colorize_optional(&opt_text(r.start_time.as_deref())));
    line("End", colorize_optional(&opt_text(r.end_time.as_deref())));
    line("Break", colorize_optional(&opt_minutes(r.break_minutes)));
    line("Side job", colorize_optional(&opt_minutes(r.side_job_minutes)));

    if r.interruptions.is_empty() {
        line("Interruptions", colorize_optional("--:--"));
    } else {
        let labels: Vec<String> = r.interruptions.iter().map(|i| i.label()).collect();
        line("Interruptions", labels.join(", "));
    }

    println!();
    line("Work", format!("{} h", fmt_hours(s.work_hours)));
    line("Break total", format!("{} h", fmt_hours(s.break_total_hours)));
    line("Interrupted", format!("{} h", fmt_hours(s.interrupt_hours)));
    line(
        "Actual",
        format!(
            "{}{} h{} ({})",
            color_for_hours(s.actual_work_hours),
            fmt_hours(s.actual_work_hours),
            RESET,
            hours2readable(s.actual_work_hours, false)
        ),
    );
    line("Gross", format!("{} h", fmt_hours(s.gross_hours)));

    if let Some(comment) = r.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        println!();
        println!("{CYAN}Comment{RESET}");
        for l in textwrap::wrap(comment, 72) {
            println!("  {l}");
        }
    }

    if let Some(ts) = &r.updated_at {
        println!();
        line("Updated", ts.clone());
    }
}
