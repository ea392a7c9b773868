//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the decision record
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every specialist's report
    Full,
    /// Only the verdict and headline factors
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for relo-council
#[derive(Parser, Debug)]
#[command(name = "relo-council")]
#[command(author, version, about = "City relocation advisor - a council of specialists reaches a consensus")]
#[command(long_about = r#"
Relo Council asks three specialist advisors (cost of living, city sentiment,
migration experiences) whether a move makes sense, then folds their reports
into one recommendation.

Two delegation modes are available:
  sequential  Each specialist reports independently, one at a time
  debate      Specialists report concurrently, then discuss across bounded
              rounds until their positions settle

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/relo-council/config.toml   Global config

Example:
  relo-council --from "Austin" --to "Seattle" --income 150000
  relo-council --from Austin --to Seattle --mode debate --priority "outdoor activities"
"#)]
pub struct Cli {
    /// The city you currently live in
    #[arg(long, value_name = "CITY")]
    pub from: Option<String>,

    /// The city you are considering moving to
    #[arg(long, value_name = "CITY")]
    pub to: Option<String>,

    /// Annual income
    #[arg(long, value_name = "AMOUNT")]
    pub income: Option<f64>,

    /// Monthly expenses
    #[arg(long, value_name = "AMOUNT")]
    pub expenses: Option<f64>,

    /// What you value in a city (can be given multiple times)
    #[arg(long = "prefer", value_name = "TAG")]
    pub preferences: Vec<String>,

    /// Things you like about your current city (can be given multiple times)
    #[arg(long = "like", value_name = "TEXT")]
    pub likes: Vec<String>,

    /// Things you dislike about your current city (can be given multiple times)
    #[arg(long = "dislike", value_name = "TEXT")]
    pub dislikes: Vec<String>,

    /// The single factor that matters most (debate mode weighs it)
    #[arg(long, value_name = "FACTOR")]
    pub priority: Option<String>,

    /// Delegation mode: sequential or debate
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Debate round budget
    #[arg(long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Directory to write the markdown report to
    #[arg(long, value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
