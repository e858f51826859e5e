use super::{print_json, resolve_date};
use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::core::holiday::HolidayLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::date::{parse_year_month, weekday_short};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            HolidayAction::Add { date, name } => {
                let d = resolve_date(date)?;
                HolidayLogic::add(&mut pool, d, name)?;
                success(format!("Holiday added: {d} {name}"));
            }
            HolidayAction::Update { date, name } => {
                let d = resolve_date(date)?;
                HolidayLogic::update(&mut pool, d, name)?;
                success(format!("Holiday updated: {d} {name}"));
            }
            HolidayAction::Del { date } => {
                let d = resolve_date(date)?;
                HolidayLogic::delete(&mut pool, d)?;
                success(format!("Holiday deleted: {d}"));
            }
            HolidayAction::List { month, json } => {
                // no --month means every holiday
                let filter = match month {
                    Some(s) => Some(
                        parse_year_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
                    ),
                    None => None,
                };
                let holidays = HolidayLogic::list(&pool, filter)?;

                if *json {
                    return print_json(&holidays);
                }

                header("Holidays");
                if holidays.is_empty() {
                    info("No holidays registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::left("Date"), Column::left("Name")]);
                for h in &holidays {
                    let date = if cfg.show_weekday {
                        format!("{} {}", h.date.format("%Y-%m-%d"), weekday_short(h.date))
                    } else {
                        h.date.format("%Y-%m-%d").to_string()
                    };
                    table.add_row(vec![date, h.name.clone()]);
                }
                println!("{}", table.render());
            }
        }
    }

    Ok(())
}
