use clap::{Parser, Subcommand};

/// Command-line interface definition for coachweek
/// CLI application for fitness coaches: weekly calendars and session tracking with SQLite
#[derive(Parser)]
#[command(
    name = "coachweek",
    version = env!("CARGO_PKG_VERSION"),
    about = "A coaching CLI: schedule training sessions and review each client's week using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage coached clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage workout templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Schedule and track training sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage workout plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show a client's weekly training calendar
    Week {
        #[arg(long, help = "Client id (default: default_client from config)")]
        client: Option<i64>,

        #[arg(long, help = "Any date inside the week to show (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long,
            help = "Evaluate the week as of this moment (YYYY-MM-DD HH:MM[:SS], default: now)"
        )]
        now: Option<String>,

        #[arg(long, help = "Print the derived week as JSON")]
        json: bool,
    },

    /// Weekly completion overview for every client
    Dashboard {
        #[arg(long, help = "Any date inside the week to show (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long,
            help = "Evaluate the week as of this moment (YYYY-MM-DD HH:MM[:SS], default: now)"
        )]
        now: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Add a client
    Add { name: String },

    /// List clients
    List,
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Add a workout template
    Add {
        name: String,

        #[arg(long = "type", help = "Session type label (e.g. strength, cardio)")]
        session_type: Option<String>,
    },

    /// List workout templates
    List,

    /// Delete a workout template
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Schedule a session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Client id (default: default_client from config)")]
        client: Option<i64>,

        #[arg(long, help = "Scheduled time (HH:MM or HH:MM:SS)")]
        time: Option<String>,

        #[arg(long, help = "Workout template id")]
        template: Option<i64>,

        #[arg(
            long,
            requires = "template",
            help = "Display name stored with the template reference"
        )]
        name: Option<String>,

        #[arg(long = "type", help = "Session type label (e.g. strength, cardio)")]
        session_type: Option<String>,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,
    },

    /// Mark a session as completed
    Complete {
        id: i64,

        #[arg(long, help = "Duration in minutes")]
        duration: Option<i64>,
    },

    /// Set the status of a session (scheduled, completed, no_show, cancelled)
    Status { id: i64, status: String },

    /// Delete a session
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List sessions of a client
    List {
        #[arg(long, help = "Client id (default: default_client from config)")]
        client: Option<i64>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, START:END)"
        )]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Create a workout plan
    Add {
        name: String,

        #[arg(long)]
        client: Option<i64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "per-week", help = "Planned sessions per week (0-7)")]
        per_week: Option<i32>,
    },

    /// List workout plans
    List {
        #[arg(long)]
        client: Option<i64>,
    },

    /// Show one workout plan
    Show { id: i64 },

    /// Update fields of a workout plan
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        client: Option<i64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "per-week", help = "Planned sessions per week (0-7)")]
        per_week: Option<i32>,
    },

    /// Delete a workout plan
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
