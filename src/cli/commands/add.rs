use super::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddOptions};
use crate::core::calculator::summarize;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::interruption::Interruption;
use crate::ui::messages::success;
use crate::utils::formatting::fmt_hours;
use crate::utils::time::parse_optional_time;

/// Create or update the record of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        side_job,
        interrupt,
        clear_interrupts,
        clear_times,
        comment,
    } = cmd
    {
        let d = resolve_date(date)?;

        //
        // Times typed on the command line must be valid
        //
        let interruptions = interrupt
            .iter()
            .map(|s| Interruption::from_range(s).ok_or_else(|| AppError::InvalidInterruption(s.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        let opts = AddOptions {
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            break_minutes: *break_minutes,
            side_job_minutes: *side_job,
            interruptions,
            clear_interruptions: *clear_interrupts,
            clear_times: *clear_times,
            comment: comment.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let record = AddLogic::apply(&mut pool, d, &opts)?;

        let s = summarize(&record);
        success(format!(
            "Saved {}: actual {} h, gross {} h",
            record.date_str(),
            fmt_hours(s.actual_work_hours),
            fmt_hours(s.gross_hours)
        ));
    }

    Ok(())
}
