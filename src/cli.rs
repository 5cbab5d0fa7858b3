use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "healthplanner", version, about = "Personal daily health planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and data store
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Today's water, sleep, steps, mood and log
    Today,

    /// Seven-day overview ending today
    Week,

    /// Add or remove a glass of water
    Water {
        #[arg(value_enum)]
        action: WaterAction,
    },

    /// Record last night's sleep in hours
    Sleep {
        #[arg(allow_hyphen_values = true)]
        hours: String,
    },

    /// Record today's step count
    Steps {
        #[arg(allow_hyphen_values = true)]
        count: String,
    },

    /// Record today's mood (Happy, Calm, Neutral, Tired, Sad, Stressed)
    Mood { label: String },

    /// Calculate and save BMI
    Bmi {
        /// Weight in kg
        #[arg(allow_negative_numbers = true)]
        weight_kg: f64,
        /// Height in cm
        #[arg(allow_negative_numbers = true)]
        height_cm: f64,
    },

    /// Free-text daily log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeArg::Show)]
        mode: ThemeArg,
    },

    /// Manage reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Suggest random meals from TheMealDB
    Recipes {
        /// Number of meals
        #[arg(long)]
        count: Option<u32>,

        /// Meal category (e.g. Seafood, Vegetarian)
        #[arg(long)]
        category: Option<String>,

        /// List available categories instead
        #[arg(long, conflicts_with_all = ["count", "category"])]
        categories: bool,
    },

    /// Delete all saved data
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Today => "today",
            Self::Week => "week",
            Self::Water { .. } => "water",
            Self::Sleep { .. } => "sleep",
            Self::Steps { .. } => "steps",
            Self::Mood { .. } => "mood",
            Self::Bmi { .. } => "bmi",
            Self::Log { .. } => "log",
            Self::Theme { .. } => "theme",
            Self::Reminder { .. } => "reminder",
            Self::Recipes { .. } => "recipes",
            Self::Reset { .. } => "reset",
            Self::Config { .. } => "config",
            Self::Completions { .. } => "completions",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WaterAction {
    Add,
    Remove,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Show,
    Toggle,
    Light,
    Dark,
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Add an entry to today's log
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Show today's entries
    Show,
    /// Clear today's entries
    Clear,
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Add a reminder
    Add {
        text: String,
        /// Time of day (HH:MM)
        #[arg(long)]
        at: Option<String>,
    },
    /// List reminders
    List,
    /// Remove a reminder by id or id prefix
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. water_goal, recipes.timeout_secs)
        key: String,
        /// Config value
        value: String,
    },
}
