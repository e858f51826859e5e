use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to record attendance and forecast monthly hours with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking CLI: daily hours, monthly summaries and forecasts using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create or update the attendance record of a day
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start of work (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "End of work (HH:MM)")]
        end: Option<String>,

        #[arg(long = "break", value_name = "MINUTES", help = "Scheduled break in minutes")]
        break_minutes: Option<u32>,

        #[arg(long = "side-job", value_name = "MINUTES", help = "Side-job time in minutes")]
        side_job: Option<u32>,

        #[arg(
            long = "interrupt",
            value_name = "HH:MM-HH:MM",
            help = "Add an interruption (repeatable)"
        )]
        interrupt: Vec<String>,

        #[arg(long = "clear-interrupts", help = "Remove the stored interruptions first")]
        clear_interrupts: bool,

        #[arg(long = "clear-times", help = "Remove start and end of work")]
        clear_times: bool,

        #[arg(long = "comment", help = "Free-text note (empty string removes it)")]
        comment: Option<String>,
    },

    /// Show one day with its computed hours
    Show {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long)]
        json: bool,
    },

    /// Delete the attendance record of a day
    Del {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Per-day list of a month
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to list (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Include every calendar day, zero-filled")]
        full: bool,

        #[arg(long)]
        json: bool,
    },

    /// Monthly totals
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to summarize (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Aggregate over every calendar day, zero-filled")]
        full: bool,

        #[arg(long)]
        json: bool,
    },

    /// Projected monthly hours
    Forecast {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to forecast (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Include the cumulative day-by-day series")]
        series: bool,

        #[arg(long)]
        json: bool,
    },

    /// Actual hours of the last months
    Trend {
        #[arg(long, value_name = "YYYY-MM", help = "Last month of the trend (default: current)")]
        until: Option<String>,

        #[arg(long, default_value_t = 12, help = "Number of months")]
        months: u32,

        #[arg(long)]
        json: bool,
    },

    /// Manage holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export per-day rows with computed hours
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Register a holiday
    Add { date: String, name: String },

    /// Rename an existing holiday
    Update { date: String, name: String },

    /// Remove a holiday
    Del { date: String },

    /// List holidays
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Only this month")]
        month: Option<String>,

        #[arg(long)]
        json: bool,
    },
}
