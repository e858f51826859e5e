use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Print the "running" line, run the step, print its outcome.
fn step(label: &str, run: impl FnOnce() -> AppResult<Option<String>>) -> AppResult<()> {
    println!("{CYAN}▶ {label}…{RESET}");
    match run()? {
        None => println!("{GREEN}✔ {label} completed.{RESET}\n"),
        Some(problem) => println!("{RED}✘ {label} failed:{RESET} {problem}\n"),
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *info) {
        warning("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    // Opening the pool already applies pending migrations.
    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        step("Migration", || {
            run_pending_migrations(&pool.conn)?;
            Ok(None)
        })?;
    }

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        step("Integrity check", || {
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            Ok((integrity != "ok").then_some(integrity))
        })?;
    }

    if *vacuum {
        step("Vacuum", || {
            pool.conn.execute_batch("VACUUM;")?;
            Ok(None)
        })?;
    }

    Ok(())
}
