//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod recommend;
pub mod score;
pub mod vocab;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Recommend(cmd) => recommend::run(ctx, &cmd),
        Commands::Score(cmd) => score::run(ctx, &cmd),
        Commands::Vocab => vocab::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check(cmd) => check::run(ctx, &cmd),
    }
}
