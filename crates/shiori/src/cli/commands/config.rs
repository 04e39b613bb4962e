//! Implementation of `shiori config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::Highlighter};

/// Shows effective configuration settings, including the merged dictionaries.
pub fn run(ctx: &CommandContext) -> ExitCode {
    match ctx.config.settings_to_toml() {
        Ok(toml) => {
            print!("{}", Highlighter::new().highlight_toml(&toml));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
