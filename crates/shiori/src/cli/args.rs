//! Clap argument definitions for the `shiori` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shiori_engine::Selection;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "shiori")]
#[command(about = "Three-book recommendations from a small catalog")]
pub struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// The reader's three answers.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// What to read about (slug or label, see `shiori vocab`)
    #[arg(short = 'i', long)]
    pub interest: String,

    /// How you feel right now
    #[arg(short = 'f', long)]
    pub feeling: String,

    /// Preferred reading style
    #[arg(short = 's', long)]
    pub style: String,
}

impl SelectionArgs {
    /// Maps the flags to dictionary labels.
    pub fn to_selection(&self) -> Selection {
        Selection::resolve(&self.interest, &self.feeling, &self.style)
    }
}

/// Arguments for `shiori recommend`.
#[derive(Args, Debug, Clone)]
pub struct RecommendCommand {
    #[command(flatten)]
    /// Selection flags.
    pub selection: SelectionArgs,

    /// Catalog JSON file [default: settings.catalog from config]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed for a reproducible pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `shiori score`.
#[derive(Args, Debug, Clone)]
pub struct ScoreCommand {
    #[command(flatten)]
    /// Selection flags.
    pub selection: SelectionArgs,

    /// Catalog JSON file [default: settings.catalog from config]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `shiori check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Catalog JSON file [default: settings.catalog from config]
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for `shiori init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.shiori.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `shiori` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Recommend three books for a selection
    #[command(after_help = "\
EXAMPLES:
  shiori recommend -i work -f positive -s practical
  shiori recommend -i habits -f small-step -s light --seed 7
  shiori recommend -i 仕事・キャリア -f 前向きになりたい -s 具体的に実践したい --json")]
    Recommend(RecommendCommand),

    /// Show every book's score and the chosen pool
    Score(ScoreCommand),

    /// List the questions and their answers
    Vocab,

    /// Initialize shiori configuration in current directory
    Init(InitCommand),

    /// Show effective configuration
    Config,

    /// Validate configuration and the catalog file
    Check(CheckCommand),
}

impl Commands {
    /// Returns true if the command reads the merged configuration.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}
