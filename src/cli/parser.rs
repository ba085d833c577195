use crate::core::dial::DialComponent;
use crate::export::ExportFormat;
use crate::models::Meridiem;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAlarm
/// CLI alarm clock: dial-driven time picking with alarms stored in SQLite
#[derive(Parser)]
#[command(
    name = "ralarm",
    version = env!("CARGO_PKG_VERSION"),
    about = "A classic-watch alarm manager: pick times on a dial and keep alarms in SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new alarm
    Add {
        /// Alarm time (HH:MM, 24h, or "h:MM AM/PM")
        time: String,

        #[arg(long = "label", help = "Alarm label (blank means the default label)")]
        label: Option<String>,

        #[arg(
            long = "date",
            conflicts_with_all = ["days", "no_schedule"],
            help = "Ring once on this date (YYYY-MM-DD); defaults to today"
        )]
        date: Option<String>,

        #[arg(
            long = "days",
            conflicts_with = "no_schedule",
            help = "Repeat on these days, e.g. \"Mon, Wed, Fri\""
        )]
        days: Option<String>,

        #[arg(long = "no-schedule", help = "Store the alarm without date or days")]
        no_schedule: bool,

        #[arg(long = "inactive", help = "Create the alarm switched off")]
        inactive: bool,
    },

    /// Edit an existing alarm
    Edit {
        /// Alarm id (full or unique prefix)
        id: String,

        #[arg(long = "time", help = "New time (HH:MM or h:MM AM/PM)")]
        time: Option<String>,

        #[arg(long = "label", help = "New label")]
        label: Option<String>,

        #[arg(long = "date", conflicts_with_all = ["days", "no_schedule"], help = "Ring once on this date")]
        date: Option<String>,

        #[arg(long = "days", conflicts_with = "no_schedule", help = "Repeat on these days")]
        days: Option<String>,

        #[arg(long = "no-schedule", help = "Clear date and days")]
        no_schedule: bool,

        #[arg(long = "on", conflicts_with = "off", help = "Switch the alarm on")]
        on: bool,

        #[arg(long = "off", help = "Switch the alarm off")]
        off: bool,
    },

    /// Flip the active switch of an alarm
    Toggle {
        /// Alarm id (full or unique prefix)
        id: String,

        #[arg(long = "on", conflicts_with = "off", help = "Force the alarm on")]
        on: bool,

        #[arg(long = "off", help = "Force the alarm off")]
        off: bool,
    },

    /// List alarms
    List {
        #[arg(long = "json", help = "Print alarms as JSON")]
        json: bool,
    },

    /// Delete one alarm, or all of them
    Del {
        /// Alarm id (full or unique prefix)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<String>,

        #[arg(long = "all", help = "Delete every alarm")]
        all: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Pick a time by dragging on the dial
    Dial {
        #[arg(long = "time", help = "Starting time (HH:MM); defaults to now")]
        time: Option<String>,

        #[arg(long, value_enum, default_value = "hour", help = "Component being dragged")]
        component: DialComponent,

        #[arg(long, value_enum, help = "AM/PM selector")]
        meridiem: Option<Meridiem>,

        #[arg(
            long = "drag",
            value_name = "X,Y",
            num_args = 1..,
            allow_hyphen_values = true,
            help = "Pointer positions of the drag; the last one ends it"
        )]
        drag: Vec<String>,

        #[arg(long = "save", help = "Store the picked time as a new alarm")]
        save: bool,

        #[arg(long = "label", requires = "save", help = "Label for the saved alarm")]
        label: Option<String>,
    },

    /// Show the numbers around the dial face
    Face {
        #[arg(long, value_enum, default_value = "hour")]
        component: DialComponent,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export alarms
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import alarms from a previous export
    Import {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
