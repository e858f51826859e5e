use super::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, yes } = cmd {
        let d = resolve_date(date)?;
        let mut pool = DbPool::new(&cfg.database)?;

        // A missing record is reported before asking anything.
        DeleteLogic::ensure_exists(&pool, d)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete the attendance record for {d}? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut pool, d)?;
        success(format!("Attendance record for {d} has been deleted."));
    }

    Ok(())
}
