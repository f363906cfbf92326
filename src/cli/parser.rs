use crate::core::report::ReportScope;
use crate::models::punch_kind::PunchKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rPunchClock
/// CLI application to punch in/out, track worked hours and get reminders
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch clock CLI: record clock-in/lunch/clock-out punches, report worked hours and run reminders",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Punch kinds as typed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PunchArg {
    In,
    LunchOut,
    LunchIn,
    Out,
}

impl From<PunchArg> for PunchKind {
    fn from(p: PunchArg) -> Self {
        match p {
            PunchArg::In => PunchKind::ClockIn,
            PunchArg::LunchOut => PunchKind::LunchOut,
            PunchArg::LunchIn => PunchKind::LunchIn,
            PunchArg::Out => PunchKind::ClockOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Record a punch (now, or at the given time)
    Punch {
        #[arg(value_enum)]
        kind: PunchArg,

        #[arg(long = "at", help = "Punch time (YYYY-MM-DD HH:MM), defaults to now")]
        at: Option<String>,

        #[arg(long = "force", help = "Record even if out of sequence")]
        force: bool,
    },

    /// Correct an existing punch
    Edit {
        id: i64,

        #[arg(long = "at", help = "New punch time (YYYY-MM-DD HH:MM)")]
        at: Option<String>,

        #[arg(long = "kind", value_enum, help = "New punch kind")]
        kind: Option<PunchArg>,
    },

    /// Delete a punch by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip confirmation")]
        yes: bool,
    },

    /// List punches and worked time per day
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,

        #[arg(long = "details", help = "Show every punch of each day")]
        details: bool,
    },

    /// Worked-time totals and averages for a day, week or month
    Report {
        #[arg(long, value_enum, default_value = "week")]
        scope: ReportScope,

        #[arg(long = "date", help = "Any day inside the period (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Manage the configuration file and reminder settings
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "reminders", value_enum, help = "Turn reminders on or off")]
        reminders: Option<Toggle>,

        #[arg(long = "entry-at", value_name = "HH:MM|off")]
        entry_at: Option<String>,

        #[arg(long = "lunch-exit-at", value_name = "HH:MM|off")]
        lunch_exit_at: Option<String>,

        #[arg(long = "afternoon-entry-at", value_name = "HH:MM|off")]
        afternoon_entry_at: Option<String>,

        #[arg(
            long = "exit-after",
            value_name = "HOURS",
            help = "Remind to clock out after this much time since clock-in (0 disables)"
        )]
        exit_after: Option<String>,

        #[arg(long = "interval", value_name = "MINUTES", help = "Reminder check interval")]
        interval: Option<i64>,
    },

    /// Run the reminder scheduler in the foreground
    Remind {
        #[arg(long = "once", help = "Run a single check and exit")]
        once: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
